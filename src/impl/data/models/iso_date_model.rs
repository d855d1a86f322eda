use std::str::FromStr;

use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::errors::InvalidIsoDate;

#[derive(Debug)]
pub(crate) struct ISODateModel(NaiveDate);
impl FromStr for ISODateModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| InvalidIsoDate::with_debug(s, &e))?;
        Ok(ISODateModel(d))
    }
}

impl From<NaiveDate> for ISODateModel {
    fn from(d: NaiveDate) -> Self {
        ISODateModel(d)
    }
}

impl From<ISODateModel> for NaiveDate {
    fn from(m: ISODateModel) -> Self {
        m.0
    }
}

impl std::fmt::Display for ISODateModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
