#[test]
fn berdo_censo() {
    assert_cli::Assert::main_binary()
        .with_args(&["-c", "test_data/berdo_test_roster.csv", "--hasta", "2026"])
        .stdout()
        .contains("Programa (metadatos): BERDO")
        .stdout()
        .contains("Importe total: 38825 USD")
        .stdout()
        .contains("- Office: 38825 USD")
        .unwrap();
}

#[test]
fn berdo_factores_usuario() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-c",
            "test_data/berdo_test_roster.csv",
            "-f",
            "test_data/test_factors.csv",
            "--hasta",
            "2026",
        ])
        .stdout()
        .contains("Edificios evaluados: 3 (con sanción: 0)")
        .stdout()
        .contains("Importe total: 0 USD")
        .unwrap();
}

#[test]
fn beudo_censo() {
    assert_cli::Assert::main_binary()
        .with_args(&["-c", "test_data/beudo_test_roster.csv", "--hasta", "2030"])
        .stdout()
        .contains("Edificios del censo: 2")
        .stdout()
        .contains("Importe total: 21872 USD")
        .stdout()
        .contains("- Office: 19884 USD")
        .stdout()
        .contains("- Retail Store: 1988 USD")
        .unwrap();
}

#[test]
fn ll97_censo() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-c",
            "test_data/ll97_test_roster.csv",
            "-p",
            "LL97",
            "--desde",
            "2029",
            "--hasta",
            "2030",
        ])
        .stdout()
        .contains("Programa (usuario): LL97")
        .stdout()
        .contains("Importe total: 32321 USD")
        .stdout()
        .contains("* fallos de cálculo:")
        .stdout()
        .contains("- 3002 (Casino): No compliance threshold for building 3002 in year 2029")
        .unwrap();
}
