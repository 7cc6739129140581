use tpost_derive::tpost_error;

#[tpost_error]
pub enum DemoError {
    Io(std::io::Error),
}

fn main() {}
