use tpost_derive::tpost_error;

#[tpost_error]
pub enum DemoError {
    Io { source: std::io::Error },
}

fn main() {}
