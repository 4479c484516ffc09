use bn254_ecadd::parse::parse_hex_input;
use bn254_ecadd::{EcAdd, NoopBurner};
use structopt::StructOpt;
use tracing::Level;

use std::error::Error;

#[derive(StructOpt)]
struct Opt {
    #[structopt(long, help = "x1 || y1 || x2 || y2 as hex, at most 128 bytes")]
    input: String,
    #[structopt(long, default_value = "150", help = "gas available to the call")]
    gas: u64,
    #[structopt(long, help = "log rejected inputs and branch decisions")]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();

    let level = if opt.verbose { Level::TRACE } else { Level::WARN };
    tracing_subscriber::fmt().with_max_level(level).init();

    let input = parse_hex_input(&opt.input)?;
    let mut ec_add: EcAdd<NoopBurner> = EcAdd::default();
    match ec_add.call(&input, opt.gas) {
        Ok(output) => {
            println!("x: 0x{}", hex::encode(&output[..32]));
            println!("y: 0x{}", hex::encode(&output[32..]));
            Ok(())
        }
        Err(aborted) => Err(aborted.into()),
    }
}
