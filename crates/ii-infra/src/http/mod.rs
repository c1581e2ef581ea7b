mod ingest_gateway;

pub use ingest_gateway::{
    HttpIngestGateway, IngestApiEndpoints, DEFAULT_PRODUCTION_URL, DEFAULT_STAGING_URL,
};
