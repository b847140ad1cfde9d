use clap::ValueEnum;
use schemagen::{
    core::{Renderer, Target},
    flatbuffer::FlatBufferRenderer,
    jsonschema::JsonSchemaRenderer,
    omgidl::OmgIdlRenderer,
    protobuf::ProtobufRenderer,
    ros::{RosRenderer, RosVersion},
    typescript::{TypeScriptOptions, TypeScriptRenderer},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum TargetArg {
    Typescript,
    #[value(alias = "protobuf")]
    Proto,
    Flatbuffer,
    Ros1,
    Ros2,
    Jsonschema,
    Omgidl,
}

impl TargetArg {
    pub fn target(self) -> Target {
        match self {
            TargetArg::Typescript => Target::TypeScript,
            TargetArg::Proto => Target::Protobuf,
            TargetArg::Flatbuffer => Target::FlatBuffer,
            TargetArg::Ros1 => Target::Ros1,
            TargetArg::Ros2 => Target::Ros2,
            TargetArg::Jsonschema => Target::JsonSchema,
            TargetArg::Omgidl => Target::OmgIdl,
        }
    }
}

/// Renderer options shared by the commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    pub typed_arrays: bool,
    pub merged: bool,
}

pub fn renderer_for(target: Target, options: RenderOptions) -> Box<dyn Renderer> {
    match target {
        Target::TypeScript => Box::new(TypeScriptRenderer::new(
            TypeScriptOptions::default().with_typed_arrays(options.typed_arrays),
        )),
        Target::Protobuf => Box::new(ProtobufRenderer::new()),
        Target::FlatBuffer => Box::new(FlatBufferRenderer::new()),
        Target::Ros1 => Box::new(RosRenderer::new(RosVersion::Ros1).with_merged(options.merged)),
        Target::Ros2 => Box::new(RosRenderer::new(RosVersion::Ros2).with_merged(options.merged)),
        Target::JsonSchema => Box::new(JsonSchemaRenderer::new()),
        Target::OmgIdl => Box::new(OmgIdlRenderer::new()),
    }
}
