#[tokio::main]
async fn main() -> std::io::Result<()> {
    booker_meta::run().await
}
