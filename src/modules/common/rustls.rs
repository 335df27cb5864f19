use crate::{
    modules::{
        context::Initialize,
        error::{code::ErrorCode, SukiResult},
    },
    raise_error,
};

pub struct SukiTls;

impl Initialize for SukiTls {
    async fn initialize() -> SukiResult<()> {
        rustls::crypto::CryptoProvider::install_default(rustls::crypto::ring::default_provider())
            .map_err(|_| {
                raise_error!(
                    "failed to set crypto provider".into(),
                    ErrorCode::InternalError
                )
            })
    }
}
