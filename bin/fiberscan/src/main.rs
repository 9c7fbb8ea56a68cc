use fiber_classify::classify::{CallSite, Classification, Classifier, Marker};
use fiber_classify::jvm::Error;

use clap::{Arg, ArgMatches, Command};
use std::io::{self, Write};

fn main() -> Result<(), Error> {
    env_logger::init();

    let matches = Command::new("Fiber call-site classifier")
        .version("0.1.0")
        .author("Alec Theriault <alec.theriault@gmail.com>")
        .about("Show how fiber instrumentation treats JVM method calls")
        .subcommand_required(true)
        .subcommand(
            Command::new("classify")
                .about("Classify a single call site")
                .arg(
                    Arg::new("OWNER")
                        .help("Owning class, in binary form (eg. `java/lang/Thread`)")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("NAME")
                        .help("Method name (eg. `sleep`)")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("DESCRIPTOR")
                        .help("Method descriptor (eg. `(J)V`)")
                        .required(true)
                        .index(3),
                ),
        )
        .subcommand(Command::new("markers").about("Print the marker annotation descriptors"))
        .subcommand(Command::new("catalog").about("Print the blocking method catalog"))
        .get_matches();

    let classifier = Classifier::standard()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match matches.subcommand() {
        Some(("classify", sub_matches)) => {
            let site = call_site(sub_matches);
            log::info!("Classifying {:?}", &site);
            match classifier.classify(&site) {
                Classification::NotRelevant => writeln!(out, "not relevant")?,
                Classification::YieldPoint => writeln!(out, "yield point")?,
                Classification::AllowedBlocking => writeln!(out, "allowed blocking")?,
                Classification::DisallowedBlocking(index) => match classifier.blocking_method(index)
                {
                    Some(method) => {
                        writeln!(out, "disallowed blocking #{} ({})", index, method)?
                    }
                    None => writeln!(out, "disallowed blocking #{}", index)?,
                },
            }
        }
        Some(("markers", _)) => {
            for marker in Marker::ALL {
                writeln!(out, "{:?}\t{}", marker, marker.descriptor())?;
            }
        }
        Some(("catalog", _)) => {
            for (index, method) in classifier.blocking_methods().iter() {
                writeln!(
                    out,
                    "{}\t{}\t{}",
                    index,
                    method,
                    method.descriptors.join(" ")
                )?;
            }
        }
        _ => unreachable!("a subcommand is required"),
    }

    Ok(())
}

fn call_site(matches: &ArgMatches) -> CallSite {
    let arg = |id: &str| matches.get_one::<String>(id).cloned().unwrap_or_default();
    CallSite::new(arg("OWNER"), arg("NAME"), arg("DESCRIPTOR"))
}
