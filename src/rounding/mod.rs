mod mode;

pub use self::mode::RoundMode;

#[cfg(test)]
mod tests;
