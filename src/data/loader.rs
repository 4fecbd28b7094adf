use std::collections::HashMap;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use super::model::{Catalog, DegreeLevel, LocationCategory, Program, TuitionFee, University};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a catalog from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "id": ..., "name": ..., "programs": [...] }, ...]`
/// * `.csv`  – one row per program, university columns repeated
pub fn load_file(path: &Path) -> Result<Catalog> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            parse_json(&text)
        }
        "csv" => {
            let file = std::fs::File::open(path).context("opening CSV")?;
            parse_csv(file)
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Expected JSON schema (the shape of the bundled `assets/catalog.json`):
///
/// ```json
/// [
///   {
///     "id": "1", "name": "LUMS", "location": "Lahore, Pakistan",
///     "type": "local", "ranking": 1, "rating": 4.8,
///     "tuitionFee": { "local": 800000, "international": 1200000 },
///     "programs": [ { "id": "cs1", "name": "...", "type": "Bachelor", ... } ],
///     "scholarships": true, "image": "/placeholder.svg"
///   }
/// ]
/// ```
///
/// Fees are non-negative whole currency units; a fractional or negative fee
/// is a parse error rather than being rounded or clamped.
pub fn parse_json(text: &str) -> Result<Catalog> {
    let universities: Vec<University> =
        serde_json::from_str(text).context("parsing catalog JSON")?;
    Catalog::from_universities(universities).context("validating catalog")
}

pub fn write_json<W: Write>(catalog: &Catalog, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, &catalog.universities).context("writing catalog JSON")
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// One flattened program row. University columns repeat for every program
/// and must be identical on each repetition; a row with an empty
/// `program_id` declares a university without programs. `requirements` and
/// `career_paths` are semicolon-separated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CsvRow {
    university_id: String,
    university_name: String,
    location: String,
    #[serde(rename = "type")]
    category: String,
    ranking: u32,
    rating: f64,
    local_fee: u64,
    international_fee: u64,
    scholarships: bool,
    image: String,
    program_id: String,
    program_name: String,
    field: String,
    duration: String,
    degree: String,
    requirements: String,
    career_paths: String,
    average_salary: String,
}

pub fn parse_csv<R: Read>(input: R) -> Result<Catalog> {
    let mut reader = csv::Reader::from_reader(input);
    let mut universities: Vec<University> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    // Records are numbered from 1, not counting the header.
    for (record_no, result) in (1..).zip(reader.deserialize::<CsvRow>()) {
        let row = result.with_context(|| format!("CSV record {record_no}"))?;
        let category: LocationCategory = row
            .category
            .parse()
            .with_context(|| format!("CSV record {record_no}"))?;
        let uni = University {
            id: row.university_id.clone(),
            name: row.university_name.clone(),
            location: row.location.clone(),
            category,
            ranking: row.ranking,
            rating: row.rating,
            tuition_fee: TuitionFee {
                local: row.local_fee,
                international: row.international_fee,
            },
            programs: Vec::new(),
            scholarships: row.scholarships,
            image: row.image.clone(),
        };

        let pos = match positions.get(&row.university_id) {
            Some(&pos) => {
                // Repeated university columns must agree with the first row.
                let first = University {
                    programs: Vec::new(),
                    ..universities[pos].clone()
                };
                if first != uni {
                    bail!(
                        "CSV record {record_no}: columns for university '{}' differ from its first row",
                        row.university_id
                    );
                }
                pos
            }
            None => {
                universities.push(uni);
                positions.insert(row.university_id.clone(), universities.len() - 1);
                universities.len() - 1
            }
        };

        if row.program_id.is_empty() {
            continue;
        }
        let degree: DegreeLevel = row
            .degree
            .parse()
            .with_context(|| format!("CSV record {record_no}"))?;
        universities[pos].programs.push(Program {
            id: row.program_id,
            name: row.program_name,
            field: row.field,
            duration: row.duration,
            degree,
            requirements: split_list(&row.requirements),
            career_paths: split_list(&row.career_paths),
            average_salary: row.average_salary,
        });
    }

    Catalog::from_universities(universities).context("validating catalog")
}

/// Fails on list entries that would not survive `parse_csv`.
pub fn write_csv<W: Write>(catalog: &Catalog, output: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(output);
    for uni in &catalog.universities {
        let base = CsvRow {
            university_id: uni.id.clone(),
            university_name: uni.name.clone(),
            location: uni.location.clone(),
            category: uni.category.to_string(),
            ranking: uni.ranking,
            rating: uni.rating,
            local_fee: uni.tuition_fee.local,
            international_fee: uni.tuition_fee.international,
            scholarships: uni.scholarships,
            image: uni.image.clone(),
            ..CsvRow::default()
        };
        if uni.programs.is_empty() {
            writer.serialize(&base).context("writing CSV row")?;
            continue;
        }
        for p in &uni.programs {
            let row = CsvRow {
                program_id: p.id.clone(),
                program_name: p.name.clone(),
                field: p.field.clone(),
                duration: p.duration.clone(),
                degree: p.degree.to_string(),
                requirements: join_list(&p.requirements)
                    .with_context(|| format!("program '{}' requirements", p.id))?,
                career_paths: join_list(&p.career_paths)
                    .with_context(|| format!("program '{}' career paths", p.id))?,
                average_salary: p.average_salary.clone(),
                ..base.clone()
            };
            writer.serialize(&row).context("writing CSV row")?;
        }
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

const LIST_SEPARATOR: &str = ";";

fn join_list(items: &[String]) -> Result<String> {
    for item in items {
        if item.contains(LIST_SEPARATOR) {
            bail!("entry '{item}' contains the list separator '{LIST_SEPARATOR}'");
        }
        if item.trim().is_empty() || item.trim() != item.as_str() {
            bail!("entry '{item}' is blank or has surrounding whitespace");
        }
    }
    Ok(items.join(LIST_SEPARATOR))
}

fn split_list(s: &str) -> Vec<String> {
    s.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|tok| !tok.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "university_id,university_name,location,type,ranking,rating,local_fee,international_fee,scholarships,image,program_id,program_name,field,duration,degree,requirements,career_paths,average_salary\n";

    #[test]
    fn csv_groups_rows_by_university_in_first_seen_order() {
        let text = format!(
            "{HEADER}\
             2,FAST NUCES,Karachi,local,2,4.6,600000,900000,true,,eng1,Software Engineering,Engineering,4 years,Bachelor,FSc;Entry Test,Developer,PKR\n\
             1,LUMS,Lahore,local,1,4.8,800000,1200000,true,,cs1,Computer Science,Computer Science,4 years,Bachelor,,,PKR\n\
             2,FAST NUCES,Karachi,local,2,4.6,600000,900000,true,,ms1,Data Science,Computer Science,2 years,Master,,,PKR\n\
             3,Empty U,Nowhere,international,9,3.0,1,2,false,,,,,,,,,\n"
        );
        let catalog = parse_csv(text.as_bytes()).unwrap();

        let ids: Vec<&str> = catalog.universities.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", "3"]);
        assert_eq!(catalog.universities[0].programs.len(), 2);
        assert_eq!(
            catalog.universities[0].programs[0].requirements,
            vec!["FSc".to_string(), "Entry Test".to_string()]
        );
        assert_eq!(catalog.universities[0].programs[1].degree, DegreeLevel::Master);
        assert!(catalog.universities[1].programs[0].career_paths.is_empty());
        assert!(catalog.universities[2].programs.is_empty());
        assert_eq!(catalog.universities[2].category, LocationCategory::International);
    }

    #[test]
    fn csv_rejects_unknown_degree() {
        let text = format!(
            "{HEADER}1,A,X,local,1,4.0,1,1,false,,p,P,Arts,1 year,Diploma,,,\n"
        );
        let err = parse_csv(text.as_bytes()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("Diploma"), "{msg}");
        assert!(msg.contains("CSV record 1"), "{msg}");
    }

    #[test]
    fn csv_round_trips_through_writer() {
        let catalog = parse_json(crate::data::SAMPLE_CATALOG).unwrap();
        let mut buf = Vec::new();
        write_csv(&catalog, &mut buf).unwrap();
        assert_eq!(parse_csv(buf.as_slice()).unwrap(), catalog);
    }

    #[test]
    fn csv_writer_refuses_entries_that_would_not_read_back() {
        let mut catalog = parse_json(crate::data::SAMPLE_CATALOG).unwrap();
        catalog.universities[0].programs[0].requirements = vec!["FSc; ICS".to_string()];
        let err = write_csv(&catalog, Vec::new()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("program 'cs1' requirements"), "{msg}");
        assert!(msg.contains("FSc; ICS"), "{msg}");

        catalog.universities[0].programs[0].requirements = vec![" padded".to_string()];
        assert!(write_csv(&catalog, Vec::new()).is_err());
    }

    #[test]
    fn csv_rejects_conflicting_university_columns() {
        let text = format!(
            "{HEADER}\
             1,LUMS,Lahore,local,1,4.8,800000,1200000,true,,cs1,CS,Computer Science,4 years,Bachelor,,,PKR\n\
             1,LUMS,Lahore,local,1,4.8,750000,1200000,true,,cs2,AI,Computer Science,4 years,Master,,,PKR\n"
        );
        let err = parse_csv(text.as_bytes()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("CSV record 2"), "{msg}");
        assert!(msg.contains("university '1'"), "{msg}");
    }

    #[test]
    fn json_rejects_fractional_fees() {
        let text = r#"[
            {"id":"1","name":"A","location":"","type":"local","ranking":1,"rating":4,
             "tuitionFee":{"local":10.5,"international":1},"programs":[],"scholarships":false,"image":""}
        ]"#;
        assert!(parse_json(text).is_err());
    }

    #[test]
    fn json_rejects_duplicate_ids() {
        let text = r#"[
            {"id":"1","name":"A","location":"","type":"local","ranking":1,"rating":4,
             "tuitionFee":{"local":1,"international":1},"programs":[],"scholarships":false,"image":""},
            {"id":"1","name":"B","location":"","type":"local","ranking":2,"rating":4,
             "tuitionFee":{"local":1,"international":1},"programs":[],"scholarships":false,"image":""}
        ]"#;
        let err = parse_json(text).unwrap_err();
        assert!(format!("{err:#}").contains("duplicate university id '1'"));
    }

    #[test]
    fn load_file_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("catalog.json");
        std::fs::write(&json_path, crate::data::SAMPLE_CATALOG).unwrap();
        let from_json = load_file(&json_path).unwrap();
        assert_eq!(from_json.len(), 3);

        let csv_path = dir.path().join("catalog.CSV");
        let file = std::fs::File::create(&csv_path).unwrap();
        write_csv(&from_json, file).unwrap();
        assert_eq!(load_file(&csv_path).unwrap(), from_json);

        let other = dir.path().join("catalog.xml");
        std::fs::write(&other, "<x/>").unwrap();
        assert!(load_file(&other).is_err());
    }
}
