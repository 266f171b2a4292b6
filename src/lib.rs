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

/*!
AcpCalc
=======

This crate provides a library and binary that **compute alternative
compliance payments** (fines) under building emissions performance
standards: *BERDO* (Boston), *BEUDO* (Cambridge) and *LL97* (New York).

Each program publishes a roster of covered buildings with their reported
energy usage. The library converts that usage into emissions through the
program emissions factors, compares the result with the building
threshold for each year of the assessment period and accumulates the
payment for the excess.

It also holds the following assumptions:

- reported energy usage is kept constant through all assessment years
- only grid electricity factors change from year to year
- the accumulated payment is rounded once per building

Este *crate* proporciona una biblioteca y un programa que **calculan los
pagos alternativos de cumplimiento** (sanciones) de los estándares de
emisiones de edificios: *BERDO* (Boston), *BEUDO* (Cambridge) y *LL97*
(Nueva York).

Cada programa publica un censo de edificios con sus consumos de energía
declarados. La biblioteca convierte esos consumos en emisiones mediante
los factores de emisión del programa, compara el resultado con el umbral
del edificio en cada año del periodo de evaluación y acumula la sanción
por el exceso.

También realiza los siguientes supuestos:

- los consumos declarados se mantienen constantes en todos los años del
  periodo de evaluación
- solo los factores de emisión de la electricidad de red varían de un
  año a otro
- la sanción acumulada se redondea una única vez por edificio

Algunas restricciones pueden revisarse en el futuro, tales como:

- lectura de consumos por año cuando los censos los publiquen
- factores de emisión definidos por el usuario para fuentes de distrito

# Ejemplo

```rust
use std::fs::read_to_string;
use acpcalc::*;

// lectura del censo de edificios
let content = read_to_string("test_data/berdo_test_roster.csv").unwrap();
let program = programs::Program::BERDO;
let roster = Roster::from_csv(&content, program.profile()).unwrap();

// factores de emisión por defecto del programa
let factors = program.factors().unwrap();

// evaluación del periodo 2025 - 2026
let params = program.params(2025, 2026);
let assessment = compute_fines(&roster, &factors, &params).unwrap();

// visualización compacta
println!("{}", assessment.to_plain());
```

*/

#![deny(missing_docs)]

#[cfg(test)] // <-- not needed in examples + integration tests
#[macro_use]
extern crate pretty_assertions;

mod factors;
mod fines;
mod report;
mod roster;
mod statops;
mod summary;

pub mod error;
pub mod programs;
pub mod types;

pub use factors::*;
pub use fines::*;
pub use report::*;
pub use roster::*;
pub use summary::*;

/// Número de versión de la librería
///
/// Version number
pub static VERSION: &str = env!("CARGO_PKG_VERSION");
