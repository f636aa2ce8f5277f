use console::style;

use crate::cli::parse_assignments;
use crate::error::{DokployError, Result};
use crate::source::{FieldValue, SourceField, SourceFamily, SourceFields};

fn field(name: &str) -> Result<SourceField> {
    SourceField::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = SourceField::ALL.iter().map(|f| f.name()).collect();
        DokployError::InvalidArgument(format!(
            "unknown source field '{}'. Known fields: {}",
            name,
            known.join(", ")
        ))
    })
}

fn build_fields(set: &[String], pending: &[String]) -> Result<SourceFields> {
    let mut fields = SourceFields::default();
    for (name, value) in parse_assignments(set)? {
        fields.set(field(&name)?, FieldValue::Value(value));
    }
    for name in pending {
        fields.set(field(name)?, FieldValue::Pending);
    }
    Ok(fields)
}

pub async fn execute(family: &str, set: &[String], pending: &[String]) -> Result<()> {
    let family = SourceFamily::by_name(family).ok_or_else(|| {
        DokployError::InvalidArgument(format!(
            "unknown family '{}'. Use application or compose",
            family
        ))
    })?;
    let fields = build_fields(set, pending)?;

    for f in SourceField::ALL {
        if fields.get(f) != &FieldValue::Unset && !family.uses(f) {
            eprintln!(
                "{} {} does not affect {} source types",
                style("!").yellow().bold(),
                style(f).cyan(),
                family.name
            );
        }
    }

    println!("{}", family.infer(&fields));
    Ok(())
}
