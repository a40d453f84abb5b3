#![forbid(unsafe_code)]

pub mod app;
pub mod assets;
pub mod crop;
pub mod edit;
pub mod foundation;
pub mod model;
pub mod render;
pub mod theme;

pub use app::state::{AppMode, AppState, MenuEntry};
pub use crop::{
    export::{CROP_FILE_NAME, CROP_OUTPUT_HEIGHT, CROP_OUTPUT_WIDTH},
    geometry::{CropState, CropTool, PointerKind, PointerResponse},
};
pub use edit::{
    ops::{EditOp, EffectIdGen},
    panel::{EditorPanel, FieldSpec, Widget},
    path::FieldPath,
    record::Editable,
    value::FieldValue,
};
pub use foundation::{
    core::{Point, Rect, Rgba8, Size},
    error::{ForgeError, ForgeResult},
};
pub use model::{
    artefact::ArtefactData,
    card::{CardData, CastConfig, StatusEffect},
    document::EntityDocument,
    enums::{
        CardType, CastTier, ClosedEnum, ElementType, EntityKind, Language, StructureType,
        TargetType,
    },
    rune::RuneData,
    structure::StructureData,
};
pub use render::{
    entity::Entity,
    export::{ExportedPng, Renderer, export_file_name},
    settings::RenderSettings,
};
