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

// Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>

/*!
Resultados del cálculo de sanciones (fines)
===========================================

Sanciones por edificio, sanciones agregadas por tipo de uso y fallos
de cálculo detectados durante la evaluación de un censo.
*/

use serde::{Deserialize, Serialize};

/// Sanción acumulada de un edificio en el periodo de evaluación
///
/// El importe se redondea al dólar entero una única vez por edificio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FineRecord {
    /// Identificador del edificio
    pub id: String,
    /// Tipo de uso del edificio
    pub category: String,
    /// Importe de la sanción [USD]
    pub amount: i64,
}

/// Sanción agregada de los edificios de un tipo de uso
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedFine {
    /// Tipo de uso del edificio
    pub category: String,
    /// Importe total de las sanciones del tipo de uso [USD]
    pub amount: i64,
}

/// Fallo de cálculo de un edificio
///
/// Los fallos de un edificio no detienen la evaluación del resto del censo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingFailure {
    /// Identificador del edificio
    pub id: String,
    /// Tipo de uso del edificio
    pub category: String,
    /// Causa del fallo
    pub error: String,
}
