#[tokio::main]
async fn main() -> std::io::Result<()> {
    guesthouse_backend::run().await
}
