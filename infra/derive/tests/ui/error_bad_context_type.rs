use tpost_derive::tpost_error;

#[tpost_error]
pub enum DemoError {
    Bad { message: String, context: Option<String> },
}

fn main() {}
