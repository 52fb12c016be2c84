use super::page_error::PageError;

pub trait OkOrPage<T> {
    fn ok_or_page<S: ToString>(self, msg: S) -> Result<T, PageError>;
}

impl<T> OkOrPage<T> for Option<T> {
    fn ok_or_page<S: ToString>(self, msg: S) -> Result<T, PageError> {
        self.ok_or_else(|| PageError(msg.to_string()))
    }
}
