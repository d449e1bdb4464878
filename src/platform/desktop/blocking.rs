use tokio::task::JoinError;

/// Runs blocking I/O on the runtime's blocking pool and awaits it.
///
/// The blocking HTTP client panics when driven from a thread that is inside an
/// async runtime, which is the case for UI tasks.
pub async fn run_blocking<F, T, E>(f: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: From<JoinError> + Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}
