/*
 * Copyright Stormpath, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::time::SystemTime;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

// SAuthc1 timestamps use the ISO-8601 basic format, second precision, UTC.
const DATE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[year][month][day]T[hour][minute][second]Z");
const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year][month][day]");

/// Formats a `SystemTime` as `YYYYMMDD'T'HHMMSS'Z'`.
pub(crate) fn format_date_time(time: SystemTime) -> String {
    OffsetDateTime::from(time)
        .format(DATE_TIME_FORMAT)
        .expect("timestamp format is static and well-formed")
}

/// Formats a `SystemTime` as `YYYYMMDD`.
pub(crate) fn format_date(time: SystemTime) -> String {
    OffsetDateTime::from(time)
        .format(DATE_FORMAT)
        .expect("date format is static and well-formed")
}

#[cfg(test)]
pub(crate) mod test_parsers {
    use super::DATE_TIME_FORMAT;
    use std::time::SystemTime;
    use time::PrimitiveDateTime;

    pub(crate) fn parse_date_time(date_time_str: &str) -> Result<SystemTime, time::error::Parse> {
        let date_time = PrimitiveDateTime::parse(date_time_str, DATE_TIME_FORMAT)?.assume_utc();
        Ok(date_time.into())
    }
}
