use serde::de::DeserializeOwned;

pub(crate) mod open_library;

/// The HTTP transport used to reach the catalog.
pub trait Client
where
    Self: Default,
{
    /// Sends a GET request to `url` and deserializes the JSON response body.
    ///
    /// # Errors
    ///
    /// An [`ErrorKind::IO`] error when the request cannot be made and an
    /// [`ErrorKind::Deserialize`] error when the body is not the expected JSON.
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned;
}

impl Client for reqwest::blocking::Client {
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        self.get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| Error::wrap(ErrorKind::IO, e))
            .and_then(|r| r.json().map_err(|e| Error::wrap(ErrorKind::Deserialize, e)))
    }
}

#[cfg(test)]
pub(crate) use test::{
    assert_url, impl_text_producer, MockClient, NetworkErrorProducer, Producer, URL_SINK,
};

use crate::{Error, ErrorKind};
