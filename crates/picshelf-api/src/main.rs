use picshelf_core::Config;

// Use mimalloc as the global allocator; decode buffers are large and short-lived.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::from_env()?;

    let (_state, router) = picshelf_api::setup::initialize_app(config.clone()).await?;

    picshelf_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
