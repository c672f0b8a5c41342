pub mod captcha;
pub mod logger;
