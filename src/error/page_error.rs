use std::convert::From;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub struct PageError(pub String);

impl Display for PageError {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl Error for PageError {}

impl From<&str> for PageError {
	fn from(val: &str) -> Self {
		PageError(val.to_owned())
	}
}

impl From<String> for PageError {
	fn from(val: String) -> Self {
		PageError(val)
	}
}

impl From<std::io::Error> for PageError {
	fn from(err: std::io::Error) -> Self {
		PageError(err.to_string())
	}
}
