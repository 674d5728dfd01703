use super::const_error;

const_error!(INTERNAL, INTERNAL_SERVER_ERROR, "internal", "internal server error");
const_error!(
    JSON_MISSING_FIELDS,
    UNPROCESSABLE_ENTITY,
    "json_missing_fields",
    "missing fields"
);
const_error!(JSON_SYNTAX_ERROR, BAD_REQUEST, "json_syntax_error", "syntax error");
const_error!(
    JSON_CONTENT_TYPE,
    BAD_REQUEST,
    "json_content_type",
    "missing or wrong content-type"
);
const_error!(JSON_VALIDATE_INVALID, BAD_REQUEST, "json_invalid", "invalid data");
const_error!(
    MISSING_CREDENTIALS,
    UNAUTHORIZED,
    "missing_credentials",
    "missing or malformed credentials"
);
const_error!(
    WRONG_CREDENTIALS,
    UNAUTHORIZED,
    "wrong_credentials",
    "invalid admin credentials"
);
const_error!(
    DOCUMENT_NOT_FOUND,
    NOT_FOUND,
    "document_not_found",
    "document not found"
);
const_error!(
    FILE_NOT_FOUND,
    NOT_FOUND,
    "file_not_found",
    "file not found on server"
);
const_error!(NOT_A_PDF, BAD_REQUEST, "not_a_pdf", "only PDF files are allowed");
const_error!(
    FORM_MISSING_FIELDS,
    BAD_REQUEST,
    "form_missing_fields",
    "missing form fields"
);
const_error!(
    INVALID_MULTIPART,
    BAD_REQUEST,
    "invalid_multipart",
    "invalid multipart request"
);
const_error!(
    SCHEDULE_NOT_FOUND,
    NOT_FOUND,
    "schedule_not_found",
    "schedule not found"
);
