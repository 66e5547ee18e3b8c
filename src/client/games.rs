//! Games endpoint.

use reqwest::Method;

use super::HitboxClient;
use super::error::Error;
use super::response::RawResponse;
use super::types::GamesResponse;

impl HitboxClient {
    /// List game categories, sorted by number of current viewers.
    ///
    /// Returns the decoded list together with the raw HTTP response. Any
    /// status other than `200 OK` is an [`Error::UnexpectedStatus`].
    pub async fn games(&self) -> Result<(GamesResponse, RawResponse), Error> {
        let request = self.new_request(Method::GET, "games")?;
        self.execute_json(request).await
    }
}
