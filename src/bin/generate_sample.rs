use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};

use degree_guide::data::loader::{write_csv, write_json};
use degree_guide::data::model::{
    Catalog, DegreeLevel, LocationCategory, Program, TuitionFee, University,
};
use degree_guide::state::FIELDS;

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

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len() as u64) as usize]
    }
}

const CITIES: [(&str, LocationCategory); 8] = [
    ("Lahore, Pakistan", LocationCategory::Local),
    ("Karachi, Pakistan", LocationCategory::Local),
    ("Islamabad, Pakistan", LocationCategory::Local),
    ("Peshawar, Pakistan", LocationCategory::Local),
    ("London, UK", LocationCategory::International),
    ("Toronto, Canada", LocationCategory::International),
    ("Berlin, Germany", LocationCategory::International),
    ("Boston, USA", LocationCategory::International),
];

const PREFIXES: [&str; 6] = ["Applied", "Advanced", "Modern", "Clinical", "Computational", "Global"];

fn generate_program(rng: &mut SimpleRng, uni_no: usize, prog_no: usize) -> Program {
    let field = *rng.pick(&FIELDS);
    let degree = *rng.pick(&DegreeLevel::ALL);
    let duration = match degree {
        DegreeLevel::Bachelor => "4 years",
        DegreeLevel::Master => "2 years",
        DegreeLevel::PhD => "5 years",
    };
    Program {
        id: format!("u{uni_no}p{prog_no}"),
        name: format!("{} {field}", rng.pick(&PREFIXES)),
        field: field.to_string(),
        duration: duration.to_string(),
        degree,
        requirements: vec!["Entry Test".to_string(), format!("{field} background")],
        career_paths: vec![format!("{field} Specialist"), "Researcher".to_string()],
        average_salary: format!("PKR {},000/month", 60 + rng.below(120)),
    }
}

fn generate_university(rng: &mut SimpleRng, no: usize) -> University {
    let (city, category) = *rng.pick(&CITIES);
    // Fees in 100,000 steps to line up with the budget slider.
    let local = match category {
        LocationCategory::Local => (2 + rng.below(15)) * 100_000,
        LocationCategory::International => (30 + rng.below(30)) * 100_000,
    };
    let n_programs = 1 + rng.below(4) as usize;

    University {
        id: format!("u{no}"),
        name: format!("University {no} of {}", city.split(',').next().unwrap_or(city)),
        location: city.to_string(),
        category,
        ranking: 1 + rng.below(200) as u32,
        rating: 3.0 + rng.below(21) as f64 / 10.0,
        tuition_fee: TuitionFee {
            local,
            international: local + rng.below(10) * 100_000,
        },
        programs: (0..n_programs)
            .map(|p| generate_program(rng, no, p))
            .collect(),
        scholarships: rng.below(2) == 0,
        image: String::new(),
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let universities: Vec<University> = (1..=60).map(|no| generate_university(&mut rng, no)).collect();
    let catalog = Catalog::from_universities(universities).context("validating generated catalog")?;

    let json_path = "sample_catalog.json";
    let file = File::create(json_path).context("creating JSON output")?;
    write_json(&catalog, BufWriter::new(file))?;

    let csv_path = "sample_catalog.csv";
    let file = File::create(csv_path).context("creating CSV output")?;
    write_csv(&catalog, BufWriter::new(file))?;

    let n_programs: usize = catalog.universities.iter().map(|u| u.programs.len()).sum();
    println!(
        "Wrote {} universities ({n_programs} programs) to {json_path} and {csv_path}",
        catalog.len()
    );
    Ok(())
}
