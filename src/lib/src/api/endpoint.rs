use url::Url;

use crate::error::DriveError;
use crate::model::RemoteDrive;

pub fn url_from_remote(remote: &RemoteDrive, uri: &str) -> Result<Url, DriveError> {
    let url = format!("{}{uri}", remote.url());
    Ok(Url::parse(&url)?)
}

pub fn files_url(remote: &RemoteDrive) -> Result<Url, DriveError> {
    url_from_remote(remote, "/files")
}

/// `/files/{id}` with the id encoded as a single path segment
pub fn file_url(remote: &RemoteDrive, id: &str) -> Result<Url, DriveError> {
    let mut url = files_url(remote)?;
    url.path_segments_mut()
        .map_err(|_| DriveError::invalid_remote_url(remote.url()))?
        .push(id);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use crate::api::endpoint;
    use crate::error::DriveError;
    use crate::model::RemoteDrive;

    #[test]
    fn test_file_url_encodes_id() -> Result<(), DriveError> {
        let remote = RemoteDrive::from_url("https://drive.example.com/api/v2")?;
        assert_eq!(
            endpoint::file_url(&remote, "root")?.as_str(),
            "https://drive.example.com/api/v2/files/root"
        );
        assert_eq!(
            endpoint::file_url(&remote, "a/b c")?.as_str(),
            "https://drive.example.com/api/v2/files/a%2Fb%20c"
        );
        Ok(())
    }
}
