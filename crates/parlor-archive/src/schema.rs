//! Archive database schema.

/// SQL to create the recorded acts table.
pub const CREATE_RECORDED_ACTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS recorded_acts (
    id          BIGSERIAL PRIMARY KEY,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    content     TEXT NOT NULL,
    recording   TEXT NOT NULL
);
";
