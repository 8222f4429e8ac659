#[derive(thiserror::Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Output error: {0}")]
    Output(String),
}
