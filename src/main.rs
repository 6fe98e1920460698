// This is my main entry point for the address converter CLI
// Everything interesting lives in the library; here I only parse, dispatch and print
use clap::Parser;
use log::{error, LevelFilter};
use serde_json::json;
use std::process;
use vlx_address::{Command, Opt, PrefixPolicy, GLOBAL_CONFIG};

fn main() {
    // I initialize logging at Info so I can see the self-test progress and prefix warnings
    // RUST_LOG still overrides this when I want the debug trace of each conversion
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    // I parse the command line arguments using clap
    let opt = Opt::parse();

    // If a conversion fails, I log the error and exit with code 1
    if let Err(e) = run_command(opt) {
        error!("Error: {e}");
        process::exit(1);
    }
}

// This is where I handle all the different CLI commands
fn run_command(opt: Opt) -> Result<(), Box<dyn std::error::Error>> {
    // The --strict flag wins over whatever VLX_STRICT_PREFIX said
    if opt.strict {
        GLOBAL_CONFIG.set_prefix_policy(PrefixPolicy::Strict);
    }
    // I build one codec from the config and use it for every command
    let codec = GLOBAL_CONFIG.codec();

    match opt.command {
        // When I have a 0x hex-address and want the V chain-address
        Command::Encode { address } => {
            let encoded = codec.encode(&address)?;
            if opt.json {
                println!("{}", json!({ "input": address, "output": encoded }));
            } else {
                println!("{encoded}");
            }
        }
        // When I have a chain-address and want the hex-address back
        Command::Decode { address } => {
            let decoded = codec.decode(&address)?;
            if opt.json {
                println!("{}", json!({ "input": address, "output": decoded }));
            } else {
                println!("{decoded}");
            }
        }
        // When I have a mix of both forms and just want each one flipped
        Command::Convert { addresses } => {
            // I convert everything first so a bad address prints nothing
            let conversions = addresses
                .iter()
                .map(|address| codec.convert(address))
                .collect::<Result<Vec<_>, _>>()?;
            if opt.json {
                println!("{}", serde_json::to_string_pretty(&conversions)?);
            } else {
                for conversion in conversions {
                    println!(
                        "{} -> {} ({})",
                        conversion.input, conversion.output, conversion.direction
                    );
                }
            }
        }
        // When I only want to know whether an address is well formed, and which form it is
        Command::Validate { address } => {
            let kind = codec.classify(&address)?;
            if opt.json {
                println!("{}", json!({ "address": address, "kind": kind }));
            } else {
                println!("valid {kind}");
            }
        }
        // When I want to check the built-in vectors still convert both ways
        Command::SelfTest => {
            let count = vlx_address::self_test(&codec)?;
            if opt.json {
                println!("{}", json!({ "verified": count }));
            } else {
                println!("success: {count} vectors verified");
            }
        }
    }
    Ok(())
}
