pub type CmdResult<T> = packsmith::Result<(T, i32)>;

pub mod make;

pub(crate) fn run_json(command: crate::Commands) -> (packsmith::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Make(args) => crate::output::map_cmd_result_to_json(make::run_json(args)),
    }
}
