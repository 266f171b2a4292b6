// Copyright (c) 2018-2022  Ministerio de Fomento
//                          Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

// Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>,
//            Daniel Jiménez González <dani@ietcc.csic.es>,
//            Marta Sorribes Gil <msorribes@ietcc.csic.es>

use crate::error::{AcpError, Result};
use crate::fines::{aggregate_fines, Assessment};
use crate::roster::RosterProfile;
use crate::summary::{Bins, CategoryAllocation, CategoryShare, CategorySummary};
use crate::types::AggregatedFine;

// ==================== Conversión a formato simple

/// Muestra en formato simple
///
/// Esta función usa un formato simple y compacto para representar los
/// resultados de la evaluación de un censo de edificios.
pub trait AsPlain {
    /// Get in plain format
    fn to_plain(&self) -> String;
}

// ================= Implementaciones ====================

/// Muestra un valor o un guion si no es un número
fn num_or_dash(v: f64, precision: usize) -> String {
    if v.is_nan() {
        "-".to_string()
    } else {
        format!("{:.*}", precision, v)
    }
}

impl AsPlain for Assessment {
    /// Resumen de la evaluación, con las sanciones por tipo de uso
    fn to_plain(&self) -> String {
        let program = self.params.program;
        let start_year = self.params.start_year;
        let end_year = self.params.end_year;
        let fine_rate = self.params.fine_rate;
        let nbuildings = self.fines.len() + self.failures.len();
        let nfined = self.fines.iter().filter(|f| f.amount > 0).count();
        let total: i64 = self.fines.iter().map(|f| f.amount).sum();
        let by_category = aggregate_fines(&self.fines);
        let by_category = by_category.to_plain();
        let failures = if self.failures.is_empty() {
            String::new()
        } else {
            let list = self
                .failures
                .iter()
                .map(|f| format!("- {} ({}): {}", f.id, f.category, f.error))
                .collect::<Vec<_>>()
                .join("\n");
            format!("\n\n* fallos de cálculo:\n{list}")
        };

        format!(
            "** Sanciones {program}, periodo {start_year} - {end_year}

Tasa: {fine_rate:.0} USD/t CO2e
Edificios evaluados: {nbuildings} (con sanción: {nfined})
Importe total: {total} USD

* por tipo de uso:
{by_category}{failures}
"
        )
    }
}

impl AsPlain for [AggregatedFine] {
    /// Lista de sanciones agregadas por tipo de uso
    fn to_plain(&self) -> String {
        self.iter()
            .map(|a| format!("- {}: {} USD", a.category, a.amount))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl AsPlain for [CategoryAllocation] {
    /// Reparto del censo por tipo de uso
    fn to_plain(&self) -> String {
        self.iter()
            .map(|a| {
                format!(
                    "- {}: {} edificios ({:.1}%), {:.0} ft2 ({:.1}%), {:.0} t CO2e ({:.1}%)",
                    a.category,
                    a.count,
                    a.pct_buildings,
                    a.floor_area,
                    a.pct_floor_area,
                    a.ghg,
                    a.pct_ghg
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl AsPlain for [CategoryShare] {
    /// Cuotas de emisiones por tipo de uso, en tanto por uno
    fn to_plain(&self) -> String {
        self.iter()
            .map(|s| {
                format!(
                    "- {}: {:.4} de la ciudad, {:.4} del parque de edificios",
                    s.category, s.city_share, s.sector_share
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Distribución por tipo de uso de una magnitud, con sus intervalos
pub fn summary_to_plain(summary: &[CategorySummary], bins: &Bins) -> String {
    summary
        .iter()
        .map(|s| {
            let quartiles = format!(
                "Q1 {}, mediana {}, Q3 {}",
                num_or_dash(s.q1, 1),
                num_or_dash(s.median, 1),
                num_or_dash(s.q3, 1)
            );
            let counts = bins
                .labels
                .iter()
                .zip(&s.bin_counts)
                .map(|(label, count)| format!("{label}: {count}"))
                .collect::<Vec<_>>()
                .join(" | ");
            format!("- {}: {} valores, {quartiles}\n  {counts}", s.category, s.count)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ==================== Salida CSV ====================

/// Sanciones por edificio en formato CSV, con las columnas del censo de origen
pub fn fines_to_csv(assessment: &Assessment, profile: &RosterProfile) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(&[profile.id_col, profile.category_col, "Total Fines"])?;
    for fine in &assessment.fines {
        wtr.write_record(&[
            fine.id.as_str(),
            fine.category.as_str(),
            &fine.amount.to_string(),
        ])?;
    }
    writer_to_string(wtr)
}

/// Sanciones agregadas por tipo de uso en formato CSV
pub fn aggregates_to_csv(aggregates: &[AggregatedFine], profile: &RosterProfile) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(&[profile.category_col, "Total Fines"])?;
    for aggregate in aggregates {
        wtr.write_record(&[aggregate.category.as_str(), &aggregate.amount.to_string()])?;
    }
    writer_to_string(wtr)
}

fn writer_to_string(wtr: csv::Writer<Vec<u8>>) -> Result<String> {
    let data = wtr
        .into_inner()
        .map_err(|e| AcpError::WrongInput(format!("CSV output error: {}", e)))?;
    String::from_utf8(data).map_err(|e| AcpError::WrongInput(format!("CSV output error: {}", e)))
}

// ========================== Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fines::FineParams;
    use crate::programs::Program;
    use crate::types::{BuildingFailure, FineRecord};

    fn testassessment() -> Assessment {
        Assessment {
            params: FineParams {
                program: Program::BERDO,
                start_year: 2025,
                end_year: 2030,
                fine_rate: 234.0,
                fuels: vec![],
                floor_area_normalized: true,
            },
            fines: vec![
                FineRecord {
                    id: "1".into(),
                    category: "Office".into(),
                    amount: 1000,
                },
                FineRecord {
                    id: "2".into(),
                    category: "Office".into(),
                    amount: 0,
                },
            ],
            failures: vec![BuildingFailure {
                id: "3".into(),
                category: "Hotel".into(),
                error: "No compliance threshold for building 3 in year 2025".into(),
            }],
        }
    }

    #[test]
    fn plain_report() {
        let out = testassessment().to_plain();
        assert!(out.contains("Sanciones BERDO, periodo 2025 - 2030"));
        assert!(out.contains("Edificios evaluados: 3 (con sanción: 1)"));
        assert!(out.contains("Importe total: 1000 USD"));
        assert!(out.contains("- Office: 1000 USD"));
        assert!(out.contains("- 3 (Hotel): No compliance threshold"));
    }

    #[test]
    fn csv_report() {
        let assessment = testassessment();
        let out = fines_to_csv(&assessment, Program::BERDO.profile()).unwrap();
        assert_eq!(
            out.lines().next().unwrap(),
            "BERDO ID,BERDO Property Type,Total Fines"
        );
        assert!(out.contains("1,Office,1000"));

        let aggregates = aggregate_fines(&assessment.fines);
        let out = aggregates_to_csv(&aggregates, Program::BERDO.profile()).unwrap();
        assert!(out.contains("BERDO Property Type,Total Fines"));
        assert!(out.contains("Office,1000"));
    }
}
