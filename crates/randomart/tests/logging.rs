use randomart::cli::RandomartArgs;
use randomart::error::CliError;
use randomart::init_logging;

#[test]
fn second_logger_is_an_error() {
    let args = RandomartArgs::command_line("--error --console plain");
    init_logging(&args).expect("first logger installs");
    assert!(matches!(
        init_logging(&args),
        Err(CliError::LoggerError(_))
    ));
}
