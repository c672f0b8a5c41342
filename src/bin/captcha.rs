use advent::{captcha, logger};
use std::io::{stdin, stdout};

fn main() -> Result<(), captcha::Error> {
    logger::init_logger();
    captcha::run(stdin().lock(), stdout().lock())
}
