use crate::api::RegisterRequest;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    UserName,
    UserMail,
    Gender,
    PhoneNumber,
    Password,
    UserType,
    Branch,
    Dept,
    Designation,
    Address,
}

impl RegisterField {
    /// Rendering order of the form.
    pub const ALL: [RegisterField; 10] = [
        RegisterField::UserName,
        RegisterField::UserMail,
        RegisterField::Gender,
        RegisterField::PhoneNumber,
        RegisterField::Password,
        RegisterField::UserType,
        RegisterField::Branch,
        RegisterField::Dept,
        RegisterField::Designation,
        RegisterField::Address,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RegisterField::UserName => "userName",
            RegisterField::UserMail => "userMail",
            RegisterField::Gender => "gender",
            RegisterField::PhoneNumber => "phoneNumber",
            RegisterField::Password => "password",
            RegisterField::UserType => "user_Type",
            RegisterField::Branch => "branch",
            RegisterField::Dept => "dept",
            RegisterField::Designation => "designation",
            RegisterField::Address => "address",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            RegisterField::UserName => "Username",
            RegisterField::UserMail => "Email",
            RegisterField::Gender => "Gender",
            RegisterField::PhoneNumber => "Phone Number",
            RegisterField::Password => "Password",
            RegisterField::UserType => "User Type (Admin/Employee)",
            RegisterField::Branch => "Branch",
            RegisterField::Dept => "Department",
            RegisterField::Designation => "Designation",
            RegisterField::Address => "Address",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            RegisterField::UserMail => "email",
            RegisterField::Password => "password",
            _ => "text",
        }
    }
}

#[derive(Clone, Copy)]
pub struct RegisterFormState {
    pub user_name: RwSignal<String>,
    pub user_mail: RwSignal<String>,
    pub gender: RwSignal<String>,
    pub phone_number: RwSignal<String>,
    pub password: RwSignal<String>,
    pub user_type: RwSignal<String>,
    pub branch: RwSignal<String>,
    pub dept: RwSignal<String>,
    pub designation: RwSignal<String>,
    pub address: RwSignal<String>,
}

impl Default for RegisterFormState {
    fn default() -> Self {
        Self {
            user_name: create_rw_signal(String::new()),
            user_mail: create_rw_signal(String::new()),
            gender: create_rw_signal(String::new()),
            phone_number: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            user_type: create_rw_signal(String::new()),
            branch: create_rw_signal(String::new()),
            dept: create_rw_signal(String::new()),
            designation: create_rw_signal(String::new()),
            address: create_rw_signal(String::new()),
        }
    }
}

impl RegisterFormState {
    pub fn signal(&self, field: RegisterField) -> RwSignal<String> {
        match field {
            RegisterField::UserName => self.user_name,
            RegisterField::UserMail => self.user_mail,
            RegisterField::Gender => self.gender,
            RegisterField::PhoneNumber => self.phone_number,
            RegisterField::Password => self.password,
            RegisterField::UserType => self.user_type,
            RegisterField::Branch => self.branch,
            RegisterField::Dept => self.dept,
            RegisterField::Designation => self.designation,
            RegisterField::Address => self.address,
        }
    }

    /// Fields are sent as typed; the backend owns validation.
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            user_name: self.user_name.get_untracked(),
            user_mail: self.user_mail.get_untracked(),
            gender: self.gender.get_untracked(),
            phone_number: self.phone_number.get_untracked(),
            password: self.password.get_untracked(),
            user_type: self.user_type.get_untracked(),
            branch: self.branch.get_untracked(),
            dept: self.dept.get_untracked(),
            designation: self.designation.get_untracked(),
            address: self.address.get_untracked(),
        }
    }

    pub fn reset(&self) {
        for field in RegisterField::ALL {
            self.signal(field).set(String::new());
        }
    }
}
