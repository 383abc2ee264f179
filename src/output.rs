// src/output.rs
use std::io::Write;

use char_freq_domain::{CharClass, value_objects::FrequencyValue};
use char_freq_usecase::AnalysisReport;
use serde::Serialize;

use crate::config::{AnalysisMode, OutputFormat};

/// Emit reports in the requested format.
pub fn emit<V: FrequencyValue>(
    reports: &[AnalysisReport<V>],
    format: OutputFormat,
    mode: AnalysisMode,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => output_table(reports, out)?,
        OutputFormat::Csv => output_delimited(reports, ',', out)?,
        OutputFormat::Tsv => output_delimited(reports, '\t', out)?,
        OutputFormat::Md => output_markdown(reports, out)?,
        OutputFormat::Json => output_json(reports, mode, out)?,
        OutputFormat::Yaml => output_yaml(reports, mode, out)?,
        OutputFormat::Jsonl => output_jsonl(reports, mode, out)?,
    }
    out.flush()?;
    Ok(())
}

fn format_value<V: FrequencyValue>(value: V) -> String {
    match V::DISPLAY_PRECISION {
        Some(precision) => format!("{value:.precision$}"),
        None => value.to_string(),
    }
}

fn output_table<V: FrequencyValue>(reports: &[AnalysisReport<V>], out: &mut impl Write) -> anyhow::Result<()> {
    let many = reports.len() > 1;
    for report in reports {
        if many {
            writeln!(out, "\n==> {} <==", report.source)?;
        }
        write_table_header::<V>(out)?;
        for (symbol, value) in &report.rows {
            writeln!(out, "    {symbol}     {}", format_value(*value))?;
        }
        write_table_total(report, out)?;
    }
    Ok(())
}

fn table_rule<V: FrequencyValue>() -> String {
    // Rank values are four decimals wide, so the rule grows with them.
    let width = if V::DISPLAY_PRECISION.is_some() { 21 } else { 18 };
    "-".repeat(width)
}

fn write_table_header<V: FrequencyValue>(out: &mut impl Write) -> anyhow::Result<()> {
    let rule = table_rule::<V>();
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "   Char{:>8}", V::LABEL)?;
    writeln!(out, "{rule}")?;
    Ok(())
}

fn write_table_total<V: FrequencyValue>(report: &AnalysisReport<V>, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{}", table_rule::<V>())?;
    writeln!(out, "   TOTAL  {}", format_value(report.total))?;
    Ok(())
}

fn output_delimited<V: FrequencyValue>(
    reports: &[AnalysisReport<V>],
    sep: char,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let label = V::LABEL.to_ascii_lowercase();
    writeln!(out, "source{sep}char{sep}code{sep}{label}")?;
    for report in reports {
        let source = escape_field(&report.source, sep);
        for (symbol, value) in &report.rows {
            let ch = escape_field(&symbol.to_string(), sep);
            writeln!(out, "{source}{sep}{ch}{sep}{}{sep}{}", symbol.byte(), value)?;
        }
    }
    Ok(())
}

fn escape_field(s: &str, sep: char) -> String {
    if sep == ',' && s.contains([',', '"', '\n']) {
        let escaped = s.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        s.to_string()
    }
}

fn output_markdown<V: FrequencyValue>(reports: &[AnalysisReport<V>], out: &mut impl Write) -> anyhow::Result<()> {
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "### {}\n", report.source.replace('|', "\\|"))?;
        writeln!(out, "| CHAR | CODE | {} |\n|:---:|---:|---:|", V::LABEL.to_ascii_uppercase())?;
        for (symbol, value) in &report.rows {
            let ch = symbol.to_string().replace('|', "\\|");
            writeln!(out, "| {ch} | {} | {} |", symbol.byte(), format_value(*value))?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(bound(serialize = "V: FrequencyValue"))]
struct JsonOutput<'a, V> {
    version: &'static str,
    mode: &'static str,
    reports: &'a [AnalysisReport<V>],
}

fn build_json_output<V: FrequencyValue>(reports: &[AnalysisReport<V>], mode: AnalysisMode) -> JsonOutput<'_, V> {
    JsonOutput { version: crate::VERSION, mode: mode.as_str(), reports }
}

fn output_json<V: FrequencyValue>(
    reports: &[AnalysisReport<V>],
    mode: AnalysisMode,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let output = build_json_output(reports, mode);
    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)?;
    Ok(())
}

fn output_yaml<V: FrequencyValue>(
    reports: &[AnalysisReport<V>],
    mode: AnalysisMode,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let output = build_json_output(reports, mode);
    let yaml_str = serde_yaml::to_string(&output)?;
    write!(out, "{yaml_str}")?;
    Ok(())
}

fn output_jsonl<V: FrequencyValue>(
    reports: &[AnalysisReport<V>],
    mode: AnalysisMode,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for report in reports {
        let class: CharClass = report.policy.class();
        for (symbol, value) in &report.rows {
            let item = serde_json::json!({
                "type": "row",
                "source": &report.source,
                "char": symbol,
                "code": symbol.byte(),
                mode.as_str(): value,
            });
            serde_json::to_writer(&mut *out, &item)?;
            writeln!(out)?;
        }
        let total = serde_json::json!({
            "type": "total",
            "version": crate::VERSION,
            "source": &report.source,
            "class": class.as_str(),
            "distinct": report.rows.len(),
            mode.as_str(): report.total,
        });
        serde_json::to_writer(&mut *out, &total)?;
        writeln!(out)?;
    }
    Ok(())
}
