/*!
Tipos de error (error types)
============================

Error común para el manejo de datos de entrada y el cálculo de sanciones.

*/

use std::fmt;

use crate::types::FuelType;

/// Error de manejo de datos o de cálculo de sanciones
#[derive(Debug)]
pub enum AcpError {
    /// Error de conversión de un texto a un tipo de datos
    Parse {
        /// Texto de entrada
        from: String,
        /// Tipo de destino
        into: String,
        /// Descripción del formato esperado
        desc: &'static str,
    },
    /// Fuente de energía desconocida
    FuelUnknown(String),
    /// Programa de cumplimiento desconocido
    ProgramUnknown(String),
    /// Factor de emisión no disponible para un año y fuente de energía
    MissingFactor {
        /// Año de evaluación de la búsqueda fallida
        year: u32,
        /// Fuente de energía de la búsqueda fallida
        fuel: FuelType,
    },
    /// Umbral de emisiones no disponible para un edificio y año
    MissingThreshold {
        /// Identificador del edificio
        id: String,
        /// Año de evaluación sin umbral definido
        year: u32,
    },
    /// Datos de entrada incoherentes
    WrongInput(String),
}

impl fmt::Display for AcpError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AcpError::Parse { from, into, desc } => {
                write!(f, "Could not parse {} from \"{}\" ({})", into, from, desc)
            }
            AcpError::FuelUnknown(s) => write!(f, "Unknown fuel: {}", s),
            AcpError::ProgramUnknown(s) => write!(f, "Unknown program: {}", s),
            AcpError::MissingFactor { year, fuel } => {
                write!(f, "No emissions factor for fuel {} in year {}", fuel, year)
            }
            AcpError::MissingThreshold { id, year } => write!(
                f,
                "No compliance threshold for building {} in year {}",
                id, year
            ),
            AcpError::WrongInput(s) => write!(f, "Wrong input data: {}", s),
        }
    }
}

impl std::error::Error for AcpError {}

/// Resultado con el tipo de error común
pub type Result<T> = std::result::Result<T, AcpError>;

impl From<std::num::ParseFloatError> for AcpError {
    fn from(err: std::num::ParseFloatError) -> Self {
        AcpError::Parse {
            from: err.to_string(),
            into: "Number".into(),
            desc: "wrong number format",
        }
    }
}

impl From<std::num::ParseIntError> for AcpError {
    fn from(err: std::num::ParseIntError) -> Self {
        AcpError::Parse {
            from: err.to_string(),
            into: "Integer".into(),
            desc: "wrong integer format",
        }
    }
}

impl From<csv::Error> for AcpError {
    fn from(err: csv::Error) -> Self {
        AcpError::Parse {
            from: err.to_string(),
            into: "CSV record".into(),
            desc: "malformed CSV input",
        }
    }
}
