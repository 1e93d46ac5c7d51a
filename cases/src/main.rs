use clap::App;
use clap::Arg;
use narrow_cases::table::CASES;
use narrow_cases::Failure;
use std::process;
use warn::Warn;

struct Stdout;

impl Warn<Failure> for Stdout {
    fn warn(&mut self, failure: Failure) {
        println!("{}", failure);
    }
}

fn main() {
    narrow_logger::init();

    let matches = App::new("Checked narrowing cases")
        .about("Checks boundary values against the integer narrowing range \
                check and prints the cases that fail.")
        .arg(Arg::with_name("list")
            .short("l")
            .long("list")
            .help("Lists the cases instead of running them")
        )
        .arg(Arg::with_name("CASE")
            .help("Names of the cases to run, runs all cases if none are given")
            .multiple(true)
        )
        .get_matches();

    if matches.is_present("list") {
        for case in CASES {
            println!("{}", case);
        }
        return;
    }

    let selected: Vec<&str> = matches.values_of("CASE").map(|v| v.collect()).unwrap_or_default();
    let summary = narrow_cases::run(CASES, &selected, &mut Stdout);
    process::exit(summary.status());
}
