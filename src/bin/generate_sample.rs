use std::path::PathBuf;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use clap::Parser;
use parquet::arrow::ArrowWriter;

const ETHNICITIES: [&str; 5] = ["Asian", "Black", "Hispanic", "Indigenous", "Middle Eastern"];
const GENDERS: [&str; 3] = ["Female", "Male", "Non-binary"];
const ATTRIBUTES: [&str; 8] = [
    "Compensation",
    "Flexibility",
    "Career Growth",
    "Inclusive Culture",
    "Job Security",
    "Mentorship",
    "Benefits",
    "Remote Work",
];

/// Write a simulated employment-preference survey.
#[derive(Parser, Debug)]
struct Args {
    /// Output file; `.csv` writes CSV, anything else Parquet
    #[arg(default_value = "sample_survey.parquet")]
    output: PathBuf,
    #[arg(long, default_value_t = 500)]
    rows: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Probability that a single score is left blank
    #[arg(long, default_value_t = 0.03)]
    missing_rate: f64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_f64() * n as f64) as usize % n
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn age_category(age: i64) -> &'static str {
    match age {
        i64::MIN..=29 => "18-29",
        30..=39 => "30-39",
        40..=49 => "40-49",
        50..=59 => "50-59",
        _ => "60+",
    }
}

/// Mean score (1-10 scale) a group gives an attribute. Each demographic
/// group gets its own deterministic tilt so rankings differ by selection.
fn preference(ethnicity: usize, gender: usize, age: i64, attribute: usize) -> f64 {
    let tilt = ((ethnicity * 7 + gender * 3 + attribute * 5) % 9) as f64 / 4.0;
    let age_shift = if attribute == 4 || attribute == 6 {
        (age - 18) as f64 / 20.0
    } else {
        0.0
    };
    4.5 + tilt + age_shift
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);

    let mut ids: Vec<i64> = Vec::with_capacity(args.rows);
    let mut ethnicities: Vec<&str> = Vec::with_capacity(args.rows);
    let mut genders: Vec<&str> = Vec::with_capacity(args.rows);
    let mut ages: Vec<i64> = Vec::with_capacity(args.rows);
    let mut categories: Vec<&str> = Vec::with_capacity(args.rows);
    let mut scores: Vec<Vec<Option<f64>>> = vec![Vec::with_capacity(args.rows); ATTRIBUTES.len()];

    for row in 0..args.rows {
        let e = rng.below(ETHNICITIES.len());
        let g = rng.below(GENDERS.len());
        let age = 18 + rng.below(48) as i64;

        ids.push(row as i64 + 1);
        ethnicities.push(ETHNICITIES[e]);
        genders.push(GENDERS[g]);
        ages.push(age);
        categories.push(age_category(age));

        for (a, column) in scores.iter_mut().enumerate() {
            if rng.next_f64() < args.missing_rate {
                column.push(None);
                continue;
            }
            let raw = rng.gauss(preference(e, g, age, a), 1.5);
            column.push(Some(raw.round().clamp(1.0, 10.0)));
        }
    }

    let mut fields = vec![
        Field::new("id", DataType::Int64, false),
        Field::new("Ethnicity", DataType::Utf8, false),
        Field::new("Gender", DataType::Utf8, false),
        Field::new("Age", DataType::Int64, false),
        Field::new("Age Category", DataType::Utf8, false),
    ];
    let mut columns: Vec<ArrayRef> = vec![
        Arc::new(Int64Array::from(ids)),
        Arc::new(StringArray::from(ethnicities)),
        Arc::new(StringArray::from(genders)),
        Arc::new(Int64Array::from(ages)),
        Arc::new(StringArray::from(categories)),
    ];
    for (name, values) in ATTRIBUTES.iter().zip(scores) {
        fields.push(Field::new(*name, DataType::Float64, true));
        columns.push(Arc::new(Float64Array::from(values)));
    }

    let schema = Arc::new(Schema::new(fields));
    let batch = RecordBatch::try_new(schema.clone(), columns).expect("Failed to create RecordBatch");

    let is_csv = args
        .output
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let file = std::fs::File::create(&args.output).expect("Failed to create output file");
    if is_csv {
        let mut writer = arrow::csv::Writer::new(file);
        writer.write(&batch).expect("Failed to write CSV");
    } else {
        let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
        writer.write(&batch).expect("Failed to write batch");
        writer.close().expect("Failed to close writer");
    }

    log::info!("Seed {} produced {} rows", args.seed, args.rows);
    println!(
        "Wrote {} simulated responses ({} attributes each) to {}",
        args.rows,
        ATTRIBUTES.len(),
        args.output.display()
    );
}
