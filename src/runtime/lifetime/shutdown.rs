use tokio::signal;
use tracing::warn;

pub async fn listen_for_shutdown() {
    // Aguarda Ctrl+C
    signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
    warn!("Sinal de desligamento recebido, encerrando graciosamente...");
}
