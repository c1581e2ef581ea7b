use serde::{Deserialize, Serialize};

/// Where the depositor uploaded the bag from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub bucket: String,
    pub path: String,
}

impl SourceLocation {
    /// S3 console link that opens the containing prefix, filtered to the key.
    pub fn console_url(&self) -> String {
        let (dir, name) = self.path.rsplit_once('/').unwrap_or(("", &self.path));
        format!(
            "https://s3.console.aws.amazon.com/s3/buckets/{}/{}/?tab=overview&prefixSearch={}&region=eu-west-1",
            self.bucket, dir, name
        )
    }

    /// `s3://` URI for display.
    ///
    /// Archivematica keys are long hash-like paths, so only the first and
    /// last segment are kept.
    pub fn display_uri(&self) -> String {
        if self.bucket.contains("archivematica-ingests") {
            let segments: Vec<&str> = self.path.split('/').collect();
            if let [top_level, .., filename] = segments.as_slice() {
                return format!("s3://{}/{}/.../{}", self.bucket, top_level, filename);
            }
        }
        format!("s3://{}/{}", self.bucket, self.path)
    }
}
