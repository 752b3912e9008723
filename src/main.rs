#[cfg(not(target_arch = "wasm32"))]
mod audit;
mod catalog;
mod content;
mod frontend;
mod host;
mod log;
mod preferences;
mod reveal;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    audit::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
