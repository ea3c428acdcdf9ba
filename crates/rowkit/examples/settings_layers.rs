//! Resolves settings from layered `key=value` sources, earliest layer first.
//!
//! Usage: cargo run --example settings_layers -- "port=9000" "host=example.org port=80"

use rowkit::prelude::*;
use rowkit::{field, labels, record, variant};

labels! {
    Host = "host",
    Port = "port",
    Motd = "motd",
    Missing = "missing",
    Malformed = "malformed",
}

record! {
    #[derive(Debug)]
    struct Settings {
        required {
            Host => host: String,
            Port => port: u16,
        }
        optional {
            Motd => motd: String,
        }
    }
}

variant! {
    #[derive(Debug)]
    enum SettingsError with SettingsErrorCases {
        MissingKey(&'static str) as missing: Missing,
        BadValue(String) as malformed: Malformed,
    }
}

fn resolve(layers: &[String]) -> Result<Settings, SettingsError> {
    // Earlier layers override later ones, so the first value for a key wins.
    let values = fold_map_first(layers.iter().flat_map(|layer| layer.split_whitespace()), |pair| {
        pair.split_once('=')
    });

    let host = match values.get(Host.name()) {
        Some(host) => host.to_string(),
        None => return raise(field!(Missing = Host.name())),
    };
    let port = match values.get(Port.name()) {
        Some(raw) => match raw.parse::<u16>() {
            Ok(port) => port,
            Err(_) => return raise(field!(Malformed = format!("port={raw}"))),
        },
        None => 8080,
    };

    let mut settings = Settings::new(host, port);
    set_optional(Motd, &mut settings, values.get(Motd.name()).map(|m| m.to_string()));
    Ok(settings)
}

fn main() {
    let mut layers: Vec<String> = std::env::args().skip(1).collect();
    layers.push("host=localhost motd=hello".to_string());

    match resolve(&layers) {
        Ok(settings) => {
            println!("host: {}", settings.req(Host));
            println!("port: {}", settings.req(Port));
            if let Some(motd) = settings.opt(Motd) {
                println!("motd: {motd}");
            }
        }
        Err(err) => {
            let message = match_variant(
                SettingsErrorCases {
                    missing: |key: &'static str| format!("missing required key `{key}`"),
                    malformed: |pair: String| format!("malformed setting `{pair}`"),
                },
                err,
            );
            eprintln!("{message}");
            std::process::exit(1);
        }
    }
}
