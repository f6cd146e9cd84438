use orienteer::cli::{parse_or_usage, run};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(cli) = parse_or_usage(std::env::args_os(), &mut std::io::stdout())? else {
        return Ok(());
    };

    let route = run(&cli)?;
    println!("Path length in meters: {}", route.distance);
    Ok(())
}
