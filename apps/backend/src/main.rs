#[tokio::main]
async fn main() -> anyhow::Result<()> {
    memorise_backend::run().await
}
