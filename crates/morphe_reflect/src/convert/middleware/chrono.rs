use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::convert::{DeserializeError, Middleware};
use crate::value::Value;

const DATE_TIME: &str = "%Y-%m-%dT%H:%M:%S";
const DATE_TIME_MICROS: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const DATE: &str = "%Y-%m-%d";

fn trimmed_str(value: &Value) -> Option<&str> {
    value.as_str().map(str::trim)
}

impl Middleware {
    /// Adds ISO-8601 text converters for [`NaiveDateTime`] and [`NaiveDate`].
    ///
    /// Date-times are written with microsecond precision when they have a
    /// fractional second, and without a fraction otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use morphe_reflect::convert::{Middleware, serialize};
    /// use morphe_reflect::value::Value;
    ///
    /// let mw = Middleware::new().with_chrono();
    /// let at = NaiveDate::from_ymd_opt(2022, 7, 25)
    ///     .unwrap()
    ///     .and_hms_micro_opt(11, 3, 44, 21000)
    ///     .unwrap();
    ///
    /// assert_eq!(serialize(&at, &mw).unwrap(), Value::from("2022-07-25T11:03:44.021000"));
    /// ```
    pub fn with_chrono(self) -> Self {
        self.with::<NaiveDateTime, _, _>(
            |value, _| {
                let format = if value.nanosecond() == 0 {
                    DATE_TIME
                } else {
                    DATE_TIME_MICROS
                };
                Ok(Value::from(value.format(format).to_string()))
            },
            |value, _| {
                let Some(text) = trimmed_str(value) else {
                    return Err(DeserializeError::custom::<NaiveDateTime>(
                        value,
                        "expected an ISO-8601 date-time string",
                    ));
                };
                text.parse::<NaiveDateTime>()
                    .map_err(|err| DeserializeError::custom::<NaiveDateTime>(value, err))
            },
        )
        .with::<NaiveDate, _, _>(
            |value, _| Ok(Value::from(value.format(DATE).to_string())),
            |value, _| {
                let Some(text) = trimmed_str(value) else {
                    return Err(DeserializeError::custom::<NaiveDate>(
                        value,
                        "expected an ISO-8601 date string",
                    ));
                };
                NaiveDate::parse_from_str(text, DATE)
                    .map_err(|err| DeserializeError::custom::<NaiveDate>(value, err))
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::convert::{Middleware, deserialize_as, serialize};
    use crate::value::Value;

    fn at(micros: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2022, 7, 25)
            .unwrap()
            .and_hms_micro_opt(11, 3, 44, micros)
            .unwrap()
    }

    #[test]
    fn date_time_text() {
        let mw = Middleware::new().with_chrono();

        assert_eq!(serialize(&at(0), &mw).unwrap(), Value::from("2022-07-25T11:03:44"));
        assert_eq!(
            serialize(&at(21000), &mw).unwrap(),
            Value::from("2022-07-25T11:03:44.021000")
        );

        let parsed: NaiveDateTime =
            deserialize_as(&Value::from("2022-07-25T11:03:44.021000"), &mw, false).unwrap();
        assert_eq!(parsed, at(21000));
    }

    #[test]
    fn date_text() {
        let mw = Middleware::new().with_chrono();
        let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();

        assert_eq!(serialize(&date, &mw).unwrap(), Value::from("1999-12-31"));
        assert_eq!(
            deserialize_as::<NaiveDate>(&Value::from("1999-12-31"), &mw, false).unwrap(),
            date
        );
    }

    #[test]
    fn rejects_garbage() {
        let mw = Middleware::new().with_chrono();
        let err = deserialize_as::<NaiveDate>(&Value::from(5), &mw, false).unwrap_err();
        assert_eq!(err.to_string(), "NaiveDate -> 5 |expected an ISO-8601 date string|");
    }
}
