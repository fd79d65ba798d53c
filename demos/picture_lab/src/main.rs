use argh::FromArgs;
use pixlab::Picture;
use std::path::PathBuf;

#[derive(FromArgs)]
/// Load a picture, transform it and write the result.
struct Args {
    /// path to the input picture
    #[argh(option, short = 'i', default = "PathBuf::from(\"caterpillar.jpg\")")]
    input: PathBuf,

    /// path to the output picture, the extension selects the format
    #[argh(option, short = 'o', default = "PathBuf::from(\"output.jpg\")")]
    output: PathBuf,

    /// multiply the blue channel of every pixel by this factor in [0, 1]
    #[argh(option)]
    decrease_blue: Option<f64>,

    /// scale both dimensions by this factor
    #[argh(option)]
    scale: Option<f64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    let mut picture = Picture::open(&args.input);
    println!("{picture}");

    if let Some(factor) = args.decrease_blue {
        picture.decrease_blue(factor)?;
    }

    if let Some(factor) = args.scale {
        picture = picture.scale(factor, factor)?;
        log::info!("scaled by {factor}: {}", picture.size());
    }

    picture.write(&args.output)?;
    println!("Wrote {}", args.output.display());

    Ok(())
}
