//! Command dispatch for the automation platform.
//!
//! Maps `packetbase-*` command names onto [`PacketBaseOps`] calls, pulls
//! named arguments out of a flat JSON argument map and wraps every result
//! in a [`CommandResults`] envelope. HTTP failures are passed through as
//! [`CommandError::Client`] without translation.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use bytes::Bytes;
use packetbase_core::flow::NetworkFlow;
use packetbase_upstream::{ClientError, UploadFile};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::ops::PacketBaseOps;
use crate::results::CommandResults;

/// Flat argument map as handed over by the dispatcher.
pub type Args = Map<String, Value>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error(transparent)]
    Client(#[from] ClientError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    GetModels,
    GetModel,
    ActivateModel,
    DeactivateModel,
    Predict,
    DeleteModel,
    UploadModel,
    GetFlows,
    GetFlow,
    UpdateFlow,
}

impl Command {
    pub const ALL: [Command; 10] = [
        Command::GetModels,
        Command::GetModel,
        Command::ActivateModel,
        Command::DeactivateModel,
        Command::Predict,
        Command::DeleteModel,
        Command::UploadModel,
        Command::GetFlows,
        Command::GetFlow,
        Command::UpdateFlow,
    ];

    /// Name the automation platform invokes the command by.
    pub fn name(self) -> &'static str {
        match self {
            Command::GetModels => "packetbase-get-models",
            Command::GetModel => "packetbase-get-model",
            Command::ActivateModel => "packetbase-activate-model",
            Command::DeactivateModel => "packetbase-deactivate-model",
            Command::Predict => "packetbase-predict",
            Command::DeleteModel => "packetbase-delete-model",
            Command::UploadModel => "packetbase-upload-model",
            Command::GetFlows => "packetbase-get-flows",
            Command::GetFlow => "packetbase-get-flow",
            Command::UpdateFlow => "packetbase-update-flow",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or_else(|| CommandError::UnknownCommand(s.to_string()))
    }
}

/// Resolve `name` and run it.
pub async fn dispatch<O>(ops: &O, name: &str, args: &Args) -> Result<CommandResults, CommandError>
where
    O: PacketBaseOps + ?Sized,
{
    let command: Command = name.parse()?;
    run(ops, command, args).await
}

/// Run one command. Arguments are validated before any request is sent.
pub async fn run<O>(ops: &O, command: Command, args: &Args) -> Result<CommandResults, CommandError>
where
    O: PacketBaseOps + ?Sized,
{
    tracing::info!(%command, "Running command");

    let raw = match command {
        Command::GetModels => ops.get_models().await?,
        Command::GetModel => ops.get_model(str_arg(args, "model_name")?).await?,
        Command::ActivateModel => ops.activate_model(str_arg(args, "model_name")?).await?,
        Command::DeactivateModel => ops.deactivate_model(str_arg(args, "model_name")?).await?,
        Command::Predict => {
            let model_name = str_arg(args, "model_name")?;
            let flow = flow_arg(args, "flow")?;
            ops.predict(model_name, &flow).await?
        }
        Command::DeleteModel => ops.delete_model(str_arg(args, "model_name")?).await?,
        Command::UploadModel => ops.upload_model(file_arg(args, "file").await?).await?,
        Command::GetFlows => ops.get_flows().await?,
        Command::GetFlow => ops.get_flow(str_arg(args, "flow_id")?).await?,
        Command::UpdateFlow => {
            let flow_id = str_arg(args, "flow_id")?;
            let flow = flow_arg(args, "flow")?;
            ops.update_flow(flow_id, &flow).await?
        }
    };

    Ok(CommandResults::from_raw(raw))
}

// ---- argument extraction ----

fn required<'a>(args: &'a Args, name: &'static str) -> Result<&'a Value, CommandError> {
    match args.get(name) {
        None | Some(Value::Null) => Err(CommandError::MissingArgument(name)),
        Some(value) => Ok(value),
    }
}

fn str_arg<'a>(args: &'a Args, name: &'static str) -> Result<&'a str, CommandError> {
    match required(args, name)? {
        Value::String(s) if !s.is_empty() => Ok(s),
        Value::String(_) => Err(CommandError::MissingArgument(name)),
        _ => Err(CommandError::InvalidArgument {
            name,
            reason: "expected a string".to_string(),
        }),
    }
}

/// A flow is accepted as a JSON object or as a string holding one.
fn flow_arg(args: &Args, name: &'static str) -> Result<NetworkFlow, CommandError> {
    let invalid = |reason: String| CommandError::InvalidArgument { name, reason };

    let value = match required(args, name)? {
        Value::String(raw) => serde_json::from_str(raw).map_err(|e| invalid(e.to_string()))?,
        other => other.clone(),
    };

    NetworkFlow::try_from(value).map_err(|e| invalid(e.to_string()))
}

/// Description of a local file to upload.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FileArg {
    Path(PathBuf),
    Detailed {
        path: PathBuf,
        #[serde(default)]
        filename: Option<String>,
        #[serde(default)]
        content_type: Option<String>,
    },
}

async fn file_arg(args: &Args, name: &'static str) -> Result<UploadFile, CommandError> {
    let arg: FileArg =
        serde_json::from_value(required(args, name)?.clone()).map_err(|_| {
            CommandError::InvalidArgument {
                name,
                reason: "expected a path or an object with a 'path' field".to_string(),
            }
        })?;

    let (path, filename, content_type) = match arg {
        FileArg::Path(path) => (path, None, None),
        FileArg::Detailed {
            path,
            filename,
            content_type,
        } => (path, filename, content_type),
    };

    let filename = match filename {
        Some(filename) => filename,
        None => path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| CommandError::InvalidArgument {
                name,
                reason: format!("'{}' has no file name", path.display()),
            })?,
    };

    let data = tokio::fs::read(&path).await.map_err(ClientError::from)?;
    tracing::debug!(path = %path.display(), size = data.len(), "Loaded upload file");

    Ok(UploadFile::new(filename, content_type, Bytes::from(data)))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn args(value: Value) -> Args {
        match value {
            Value::Object(map) => map,
            _ => panic!("test args must be an object"),
        }
    }

    #[test]
    fn every_command_name_parses_back() {
        for command in Command::ALL {
            assert_eq!(command.name().parse::<Command>().unwrap(), command);
        }
    }

    #[test]
    fn names_share_the_packetbase_prefix() {
        assert!(Command::ALL
            .iter()
            .all(|c| c.name().starts_with("packetbase-")));
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_matches!(
            "packetbase-train-model".parse::<Command>(),
            Err(CommandError::UnknownCommand(name)) if name == "packetbase-train-model"
        );
    }

    #[test]
    fn missing_and_null_arguments_are_missing() {
        assert_matches!(
            str_arg(&args(json!({})), "model_name"),
            Err(CommandError::MissingArgument("model_name"))
        );
        assert_matches!(
            str_arg(&args(json!({"model_name": null})), "model_name"),
            Err(CommandError::MissingArgument("model_name"))
        );
        assert_matches!(
            str_arg(&args(json!({"model_name": ""})), "model_name"),
            Err(CommandError::MissingArgument("model_name"))
        );
    }

    #[test]
    fn non_string_argument_is_invalid() {
        assert_matches!(
            str_arg(&args(json!({"flow_id": 7})), "flow_id"),
            Err(CommandError::InvalidArgument { name: "flow_id", .. })
        );
    }

    #[test]
    fn flow_accepts_object_or_encoded_object() {
        let from_object = flow_arg(&args(json!({"flow": {"proto": "tcp"}})), "flow").unwrap();
        let from_string = flow_arg(&args(json!({"flow": "{\"proto\": \"tcp\"}"})), "flow").unwrap();
        assert_eq!(from_object, from_string);
    }

    #[test]
    fn flow_rejects_arrays() {
        assert_matches!(
            flow_arg(&args(json!({"flow": [1, 2]})), "flow"),
            Err(CommandError::InvalidArgument { name: "flow", .. })
        );
    }

    #[tokio::test]
    async fn file_arg_reads_plain_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("iforest.joblib");
        std::fs::write(&path, b"model-bytes").unwrap();

        let file = file_arg(&args(json!({"file": path})), "file").await.unwrap();
        assert_eq!(file.filename, "iforest.joblib");
        assert_eq!(file.content_type, None);
        assert_eq!(&file.data[..], b"model-bytes");
    }

    #[tokio::test]
    async fn file_arg_honours_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("upload.tmp");
        std::fs::write(&path, b"x").unwrap();

        let file = file_arg(
            &args(json!({"file": {
                "path": path,
                "filename": "detector.onnx",
                "content_type": "application/x-onnx",
            }})),
            "file",
        )
        .await
        .unwrap();
        assert_eq!(file.filename, "detector.onnx");
        assert_eq!(file.content_type.as_deref(), Some("application/x-onnx"));
    }

    #[tokio::test]
    async fn missing_file_on_disk_is_a_client_error() {
        let result = file_arg(&args(json!({"file": "/nonexistent/model.bin"})), "file").await;
        assert_matches!(result, Err(CommandError::Client(ClientError::File(_))));
    }
}
