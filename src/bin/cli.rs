use clap::Parser;
use std::path::PathBuf;
use tileworld::{GenerationParams, generate_world};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Генератор тайловых карт мира
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Путь к конфигурационному файлу в формате TOML (без него используются параметры по умолчанию)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Сид, переопределяющий значение из конфигурации
    #[arg(short, long)]
    seed: Option<String>,

    /// Путь для сохранения карты (по умолчанию: ./world.png)
    #[arg(short, long, default_value = "world.png")]
    output: PathBuf,

    /// Дополнительно сохранить сетку в JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Размер тайла в пикселях
    #[arg(long, default_value_t = 8)]
    tile_size: u32,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();

    println!("🔍 Загрузка конфигурации...");
    let mut params = match &cli.config {
        Some(path) => GenerationParams::from_toml_file(path)?,
        None => GenerationParams::default(),
    };
    if cli.seed.is_some() {
        params.seed = cli.seed;
    }

    println!(
        "Генерация карты (размер: {}×{})...",
        params.width, params.height
    );
    let world = generate_world(params)?;

    println!("Сохранение в {:?}", cli.output);
    world.grid.save_as_png(&cli.output, cli.tile_size)?;
    if let Some(path) = &cli.json {
        println!("Сохранение JSON в {path:?}");
        world.grid.save_as_json(path)?;
    }

    println!("\nГотово! Сид: {}", world.seed);
    println!("Время генерации: {:.3} с", world.duration.as_secs_f64());
    Ok(())
}
