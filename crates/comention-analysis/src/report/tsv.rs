//! TSV reporter: the classic tab-separated tables.

use std::io::Write;

use comention_core::config::OutputMode;
use comention_core::errors::ReportError;

use super::Reporter;
use crate::statistics::Report;

pub const MENTION_HEADER: &str = "Entity\tFirstSeen\tMentions";
pub const COMENTION_HEADER: &str = "Entity1\tEntity2\tFirstSeen\tComentions";
pub const PAIR_HEADER: &str =
    "Entity1\tEntity2\tMentions1\tMentions2\tComentions\tMutualInformation\tLikelihood";
pub const RELATEDNESS_HEADER: &str =
    "Entity1\tEntity2\tMutualInformation\tLikelihood\tJaccard\tSharedNeighbors\tMeanSharedMI";

/// Header row, then one row per line. Negative infinity prints as `-inf`.
pub struct TsvReporter;

impl Reporter for TsvReporter {
    fn name(&self) -> &'static str {
        "tsv"
    }

    fn write(&self, report: &Report, out: &mut dyn Write) -> Result<(), ReportError> {
        match report.mode {
            OutputMode::Mention => {
                writeln!(out, "{MENTION_HEADER}")?;
                for row in &report.mentions {
                    writeln!(out, "{}\t{}\t{}", row.entity, row.first_seen, row.mentions)?;
                }
            }
            OutputMode::Comention => {
                writeln!(out, "{COMENTION_HEADER}")?;
                for row in &report.comentions {
                    writeln!(
                        out,
                        "{}\t{}\t{}\t{}",
                        row.entity1, row.entity2, row.first_seen, row.comentions
                    )?;
                }
            }
            OutputMode::Pairs | OutputMode::Implicit => {
                writeln!(out, "{PAIR_HEADER}")?;
                for row in &report.pairs {
                    writeln!(
                        out,
                        "{}\t{}\t{}\t{}\t{}\t{:.4}\t{:.4}",
                        row.entity1,
                        row.entity2,
                        row.mentions1,
                        row.mentions2,
                        row.comentions,
                        row.mutual_information,
                        row.likelihood
                    )?;
                }
                if report.mode == OutputMode::Implicit {
                    writeln!(out, "{RELATEDNESS_HEADER}")?;
                    for row in &report.implicit {
                        writeln!(
                            out,
                            "{}\t{}\t{:.4}\t{:.4}\t{:.4}\t{}\t{:.4}",
                            row.entity1,
                            row.entity2,
                            row.mutual_information,
                            row.likelihood,
                            row.jaccard,
                            row.shared_neighbors,
                            row.mean_shared_mi
                        )?;
                    }
                }
            }
        }
        out.flush()?;
        Ok(())
    }
}
