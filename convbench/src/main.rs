use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use separable_conv as sc;
use separable_conv::testing::{fill_random, seeded_rng};
use separable_conv::{ImageShape, Kernel1d};

mod print;
mod runtime;

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

#[derive(Subcommand)]
enum Command {
    /// Measure time of blur passes over a random image and print it in CSV format
    Run(RunArgs),
    /// Print a small interleaved image before and after blur passes
    Demo,
}

#[derive(Args)]
struct RunArgs {
    /// Height of the source image
    #[clap(value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Width of the source image
    #[clap(value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Depth (number of channels) of the source image
    #[clap(value_parser = clap::value_parser!(u32).range(1..))]
    depth: u32,

    /// Seed of the generator used to fill the source image
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Number of runs of every pass, the mean time is printed
    #[clap(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    iterations: u32,
}

fn main() -> Result<()> {
    let cli: Cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();
    match &cli.command {
        Command::Run(args) => run(args),
        Command::Demo => demo(),
    }
}

fn run(args: &RunArgs) -> Result<()> {
    let shape = ImageShape::new(args.height, args.width, args.depth);
    let len = shape.samples_count().ok_or_else(|| {
        anyhow!(
            "Image {}x{}x{} is too big",
            shape.height,
            shape.width,
            shape.channels
        )
    })?;

    debug!("Fill the source image {:?} with seed {}", shape, args.seed);
    let mut src = vec![0f32; len];
    fill_random(&mut src, &mut seeded_rng(args.seed));
    let mut dst = vec![0f32; len];

    println!("test,horizontal,transpose,vertical,total");
    for strategy in runtime::default_strategies() {
        info!("Measure '{}'", strategy.name);
        let runtime_info =
            runtime::measure_blur_mean(&strategy, &src, shape, &mut dst, args.iterations)?;
        println!("{},{}", strategy.name, runtime_info.to_csv());
    }
    Ok(())
}

const DEMO_IMAGE: [f32; 32] = [
    1.0, 0., 2.0, 0., 3.0, 0., 1.0, 0., //
    2.0, 0., 6.0, 0., 7.0, 0., 2.0, 0., //
    3.5, 0., 2.5, 0., 3.5, 0., 3.5, 0., //
    4.5, 0., 6.5, 0., 7.5, 0., 4.5, 0.,
];

fn demo() -> Result<()> {
    let shape = ImageShape::new(4, 4, 2);
    let kernel = Kernel1d::<f32>::box_blur(3)?;
    let mut dst = vec![0f32; DEMO_IMAGE.len()];

    sc::horiz_convolution_interleaved(&kernel, &DEMO_IMAGE, shape, 0, &mut dst)
        .with_context(|| "Failed horizontal convolution")?;
    println!("The source matrix is:");
    print!("{}", print::format_interleaved_image(&DEMO_IMAGE, shape));
    println!("\n\nThe dst matrix after horiz convolve is:");
    print!("{}", print::format_interleaved_image(&dst, shape));

    dst.fill(0.);
    sc::vert_convolution_interleaved(&kernel, &DEMO_IMAGE, shape, 0, &mut dst)
        .with_context(|| "Failed vertical convolution")?;
    println!("\n\nThe dst matrix after vert convolve is:");
    print!("{}", print::format_interleaved_image(&dst, shape));

    let mut planar = vec![0f32; DEMO_IMAGE.len()];
    sc::interleaved_to_planar(&dst, shape, &mut planar)
        .with_context(|| "Failed to convert image into planar layout")?;
    println!("\n\nThe same matrix in planar layout is:");
    print!("{}", print::format_planar_image(&planar, shape));
    Ok(())
}
