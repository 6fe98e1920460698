use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "vlx-address",
    about = "Convert between 0x hex-addresses and V chain-addresses"
)]
pub struct Opt {
    #[arg(
        long = "strict",
        global = true,
        help = "Require the V prefix when decoding chain-addresses"
    )]
    pub strict: bool,
    #[arg(long = "json", global = true, help = "Print results as JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "encode", about = "Convert a hex-address to a chain-address")]
    Encode {
        #[arg(help = "The 0x-prefixed hex-address")]
        address: String,
    },
    #[command(name = "decode", about = "Convert a chain-address to a hex-address")]
    Decode {
        #[arg(help = "The V-prefixed chain-address")]
        address: String,
    },
    #[command(
        name = "convert",
        about = "Convert each address in the direction its prefix implies"
    )]
    Convert {
        #[arg(required = true, help = "Hex-addresses and/or chain-addresses")]
        addresses: Vec<String>,
    },
    #[command(name = "validate", about = "Check whether an address is well formed")]
    Validate {
        #[arg(help = "A hex-address or chain-address")]
        address: String,
    },
    #[command(name = "selftest", about = "Verify the built-in conversion vectors")]
    SelfTest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_encode_with_global_flags() {
        let opt = Opt::parse_from([
            "vlx-address",
            "encode",
            "0x32Be343B94f860124dC4fEe278FDCBD38C102D88",
            "--json",
        ]);
        assert!(opt.json);
        assert!(!opt.strict);
        assert!(matches!(opt.command, Command::Encode { .. }));
    }

    #[test]
    fn test_parse_convert_requires_addresses() {
        assert!(Opt::try_parse_from(["vlx-address", "convert"]).is_err());
        let opt = Opt::parse_from(["vlx-address", "--strict", "convert", "a", "b"]);
        assert!(opt.strict);
        match opt.command {
            Command::Convert { addresses } => assert_eq!(addresses, vec!["a", "b"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
