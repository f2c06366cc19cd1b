use crate::error::ApiResult;
use crate::models::RegistrationRecord;

/// Receives registration records as soon as they are produced.
pub trait RegistrationSink {
    fn accept(&mut self, record: RegistrationRecord) -> ApiResult<()>;
}

impl RegistrationSink for Vec<RegistrationRecord> {
    fn accept(&mut self, record: RegistrationRecord) -> ApiResult<()> {
        self.push(record);
        Ok(())
    }
}

impl<S: RegistrationSink + ?Sized> RegistrationSink for &mut S {
    fn accept(&mut self, record: RegistrationRecord) -> ApiResult<()> {
        (**self).accept(record)
    }
}
