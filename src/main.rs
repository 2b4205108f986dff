use payments_engine::run::run;

use std::fs::File;
use std::io;

fn main() {
    let mut args = std::env::args().skip(1);
    let top_ups_path = args.next().unwrap_or_else(|| "topups.txt".to_string());
    let payments_path = args.next().unwrap_or_else(|| "payments.txt".to_string());

    let top_ups = File::open(top_ups_path).expect("cannot open the top-ups file");
    let payments = File::open(payments_path).expect("cannot open the payments file");

    run(top_ups, payments, io::stdout()).expect("failed to write the report");
}
