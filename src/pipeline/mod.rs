pub mod stage1_load;
pub mod stage2_groups;
pub mod stage3_fit;
pub mod stage4_render;
pub mod stage5_report;
