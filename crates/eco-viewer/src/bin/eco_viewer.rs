fn main() -> anyhow::Result<()> {
    env_logger::init();
    eco_viewer::cli::run()
}
