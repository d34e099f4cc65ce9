use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Gateway(#[from] vf_gateway::GatewayError),

    #[error(transparent)]
    Store(#[from] vf_store::StoreError),

    #[error(transparent)]
    Core(#[from] vf_core::CoreError),
}
