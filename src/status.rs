use std::fmt;

/// Outcome of one exchange or one logical read.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// Nothing arrived before the poll budget ran out.
    NoResponse,
    /// Some bytes arrived, but fewer than the frame called for.
    ResponseTooShort,
    /// CRC mismatch.
    InvalidFrame,
    /// The controller answered with an error function code.
    SlaveError,
    /// Logical id is not in the catalog; no exchange was attempted.
    NotHandledRegister,
    WriteSingleRegisterSuccess,
    WriteDataRegisterSuccess,
    ReadDataRegisterSuccess,
}

impl Status {
    pub fn is_success(self) -> bool {
        matches!(
            self,
            Status::WriteSingleRegisterSuccess
                | Status::WriteDataRegisterSuccess
                | Status::ReadDataRegisterSuccess
        )
    }

    /// Name used on the messaging side.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::NoResponse => "noResponse",
            Status::ResponseTooShort => "responseTooShort",
            Status::InvalidFrame => "invalidFrame",
            Status::SlaveError => "slaveError",
            Status::NotHandledRegister => "notHandledRegister",
            Status::WriteSingleRegisterSuccess => "writeSingleRegisterSuccess",
            Status::WriteDataRegisterSuccess => "writeDataRegisterSuccess",
            Status::ReadDataRegisterSuccess => "readDataRegisterSuccess",
        }
    }

    /// Fixed-width tag small enough for a status line on a tiny display.
    pub fn short_name(self) -> &'static str {
        match self {
            Status::NoResponse => "NO-RSP",
            Status::ResponseTooShort => "RSP-SHORT",
            Status::InvalidFrame => "RSP-BADCRC",
            Status::SlaveError => "SLA-ERROR",
            Status::NotHandledRegister => "NOT-HANDL",
            Status::WriteSingleRegisterSuccess => "W-SR-SUC",
            Status::WriteDataRegisterSuccess => "W-DR-SUC",
            Status::ReadDataRegisterSuccess => "R-DR-SUC",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
