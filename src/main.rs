#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    hbnb_backend::run().await
}
