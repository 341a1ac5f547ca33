//! Built-in constant tables. Names are registered lowercased by [`crate::library::Library`].

/// Key codes, also reachable as `VBA.<name>` and `VBA.KeyCodeConstants.<name>`.
pub(crate) static KEY_CODES: &[(&str, i64)] = &[
    ("vbKeyLButton", 0x1),
    ("vbKeyRButton", 0x2),
    ("vbKeyCancel", 0x3),
    ("vbKeyMButton", 0x4),
    ("vbKeyBack", 0x8),
    ("vbKeyTab", 0x9),
    ("vbKeyClear", 0xc),
    ("vbKeyReturn", 0xd),
    ("vbKeyShift", 0x10),
    ("vbKeyControl", 0x11),
    ("vbKeyMenu", 0x12),
    ("vbKeyPause", 0x13),
    ("vbKeyCapital", 0x14),
    ("vbKeyEscape", 0x1b),
    ("vbKeySpace", 0x20),
    ("vbKeyPageUp", 0x21),
    ("vbKeyPageDown", 0x22),
    ("vbKeyEnd", 0x23),
    ("vbKeyHome", 0x24),
    ("vbKeyLeft", 0x25),
    ("vbKeyUp", 0x26),
    ("vbKeyRight", 0x27),
    ("vbKeyDown", 0x28),
    ("vbKeySelect", 0x29),
    ("vbKeyPrint", 0x2a),
    ("vbKeyExecute", 0x2b),
    ("vbKeySnapshot", 0x2c),
    ("vbKeyInsert", 0x2d),
    ("vbKeyDelete", 0x2e),
    ("vbKeyHelp", 0x2f),
    ("vbKeyNumlock", 0x90),
    ("vbKeyA", 0x41),
    ("vbKeyB", 0x42),
    ("vbKeyC", 0x43),
    ("vbKeyD", 0x44),
    ("vbKeyE", 0x45),
    ("vbKeyF", 0x46),
    ("vbKeyG", 0x47),
    ("vbKeyH", 0x48),
    ("vbKeyI", 0x49),
    ("vbKeyJ", 0x4a),
    ("vbKeyK", 0x4b),
    ("vbKeyL", 0x4c),
    ("vbKeyM", 0x4d),
    ("vbKeyN", 0x4e),
    ("vbKeyO", 0x4f),
    ("vbKeyP", 0x50),
    ("vbKeyQ", 0x51),
    ("vbKeyR", 0x52),
    ("vbKeyS", 0x53),
    ("vbKeyT", 0x54),
    ("vbKeyU", 0x55),
    ("vbKeyV", 0x56),
    ("vbKeyW", 0x57),
    ("vbKeyX", 0x58),
    ("vbKeyY", 0x59),
    ("vbKeyZ", 0x5a),
    ("vbKey0", 0x30),
    ("vbKey1", 0x31),
    ("vbKey2", 0x32),
    ("vbKey3", 0x33),
    ("vbKey4", 0x34),
    ("vbKey5", 0x35),
    ("vbKey6", 0x36),
    ("vbKey7", 0x37),
    ("vbKey8", 0x38),
    ("vbKey9", 0x39),
    ("vbKeyNumpad0", 0x60),
    ("vbKeyNumpad1", 0x61),
    ("vbKeyNumpad2", 0x62),
    ("vbKeyNumpad3", 0x63),
    ("vbKeyNumpad4", 0x64),
    ("vbKeyNumpad5", 0x65),
    ("vbKeyNumpad6", 0x66),
    ("vbKeyNumpad7", 0x67),
    ("vbKeyNumpad8", 0x68),
    ("vbKeyNumpad9", 0x69),
    ("vbKeyMultiply", 0x6a),
    ("vbKeyAdd", 0x6b),
    ("vbKeySeparator", 0x6c),
    ("vbKeySubtract", 0x6d),
    ("vbKeyDecimal", 0x6e),
    ("vbKeyDivide", 0x6f),
    ("vbKeyF1", 0x70),
    ("vbKeyF2", 0x71),
    ("vbKeyF3", 0x72),
    ("vbKeyF4", 0x73),
    ("vbKeyF5", 0x74),
    ("vbKeyF6", 0x75),
    ("vbKeyF7", 0x76),
    ("vbKeyF8", 0x77),
    ("vbKeyF9", 0x78),
    ("vbKeyF10", 0x79),
    ("vbKeyF11", 0x7a),
    ("vbKeyF12", 0x7b),
    ("vbKeyF13", 0x7c),
    ("vbKeyF14", 0x7d),
    ("vbKeyF15", 0x7e),
    ("vbKeyF16", 0x7f),
    ("vbUpperCase", 0x1),
    ("vbLowerCase", 0x2),
    ("vbProperCase", 0x3),
    ("vbWide", 0x4),
    ("vbNarrow", 0x8),
    ("vbKatakana", 0x10),
    ("vbHiragana", 0x20),
    ("vbUnicode", 0x40),
    ("vbFromUnicode", 0x80),
];

/// String constants, aliased like [`KEY_CODES`].
pub(crate) static ALIASED_STRINGS: &[(&str, &str)] = &[
    ("vbNullString", ""),
    ("vbNullChar", "\0"),
    ("vbCr", "\r"),
    ("vbLf", "\n"),
    ("vbCrLf", "\r\n"),
    ("vbNewLine", "\r\n"),
    ("vbTab", "\t"),
    ("vbBack", "\x08"),
];

/// Colour, message-box, file-attribute, Excel, PowerPoint and Office enumerations.
pub(crate) static ENUMS: &[(&str, i64)] = &[
    ("xlPivotLineBlank", 3),
    ("rgbMaroon", 128),
    ("xlErrDiv0", 2007),
    ("xlErrNA", 2042),
    ("xlErrName", 2029),
    ("xlErrNull", 2000),
    ("xlErrNum", 2036),
    ("xlErrRef", 2023),
    ("xlErrValue", 2015),
    ("vbGet", 2),
    ("vbLet", 4),
    ("vbMethod", 1),
    ("vbSet", 8),
    ("xlTickMarkCross", 4),
    ("xlTickMarkInside", 2),
    ("xlTickMarkNone", -4142),
    ("xlTickMarkOutside", 3),
    ("xlXmlExportSuccess", 0),
    ("xlXmlExportValidationFailed", 1),
    ("xlCellValue", 1),
    ("xlExpression", 2),
    ("xlColorScale", 3),
    ("xlDatabar", 4),
    ("xlTop10", 5),
    ("xlIconSet", 6),
    ("xlUniqueValues", 8),
    ("xlTextString", 9),
    ("xlBlanksCondition", 10),
    ("xlTimePeriod", 11),
    ("xlAboveAverageCondition", 12),
    ("xlNoBlanksCondition", 13),
    ("xlErrorsCondition", 16),
    ("xlNoErrorsCondition", 17),
    ("xlBetween", 1),
    ("xlNotBetween", 2),
    ("xlEqual", 3),
    ("xlNotEqual", 4),
    ("xlGreater", 5),
    ("xlLess", 6),
    ("xlGreaterEqual", 7),
    ("xlLessEqual", 8),
    ("xl3DArea", -4098),
    ("xl3DAreaStacked", 78),
    ("xl3DAreaStacked100", 79),
    ("xl3DBarClustered", 60),
    ("xl3DBarStacked", 61),
    ("xl3DBarStacked100", 62),
    ("xl3DColumn", -4100),
    ("xl3DColumnClustered", 54),
    ("xl3DColumnStacked", 55),
    ("xl3DColumnStacked100", 56),
    ("xl3DLine", -4101),
    ("xl3DPie", -4102),
    ("xl3DPieExploded", 70),
    ("xlArea", 1),
    ("xlAreaStacked", 76),
    ("xlAreaStacked100", 77),
    ("xlBarClustered", 57),
    ("xlBarOfPie", 71),
    ("xlBarStacked", 58),
    ("xlBarStacked100", 59),
    ("xlBubble", 15),
    ("xlBubble3DEffect", 87),
    ("xlColumnClustered", 51),
    ("xlColumnStacked", 52),
    ("xlColumnStacked100", 53),
    ("xlConeBarClustered", 102),
    ("xlConeBarStacked", 103),
    ("xlConeBarStacked100", 104),
    ("xlConeCol", 105),
    ("xlConeColClustered", 99),
    ("xlConeColStacked", 100),
    ("xlConeColStacked100", 101),
    ("xlCylinderBarClustered", 95),
    ("xlCylinderBarStacked", 96),
    ("xlCylinderBarStacked100", 97),
    ("xlCylinderCol", 98),
    ("xlCylinderColClustered", 92),
    ("xlCylinderColStacked", 93),
    ("xlCylinderColStacked100", 94),
    ("xlDoughnut", -4120),
    ("xlDoughnutExploded", 80),
    ("xlLine", 4),
    ("xlLineMarkers", 65),
    ("xlLineMarkersStacked", 66),
    ("xlLineMarkersStacked100", 67),
    ("xlLineStacked", 63),
    ("xlLineStacked100", 64),
    ("xlPie", 5),
    ("xlPieExploded", 69),
    ("xlPieOfPie", 68),
    ("xlPyramidBarClustered", 109),
    ("xlPyramidBarStacked", 110),
    ("xlPyramidBarStacked100", 111),
    ("xlPyramidCol", 112),
    ("xlPyramidColClustered", 106),
    ("xlPyramidColStacked", 107),
    ("xlPyramidColStacked100", 108),
    ("xlRadar", -4151),
    ("xlRadarFilled", 82),
    ("xlRadarMarkers", 81),
    ("xlStockHLC", 88),
    ("xlStockOHLC", 89),
    ("xlStockVHLC", 90),
    ("xlStockVOHLC", 91),
    ("xlSurface", 83),
    ("xlSurfaceTopView", 85),
    ("xlSurfaceTopViewWireframe", 86),
    ("xlSurfaceWireframe", 84),
    ("xlXYScatter", -4169),
    ("xlXYScatterLines", 74),
    ("xlXYScatterLinesNoMarkers", 75),
    ("xlXYScatterSmooth", 72),
    ("xlXYScatterSmoothNoMarkers", 73),
    ("xl3DBar", -4099),
    ("xl3DEffects1", 13),
    ("xl3DEffects2", 14),
    ("xl3DSurface", -4103),
    ("xlAbove", 0),
    ("xlAccounting1", 4),
    ("xlAccounting2", 5),
    ("xlAccounting4", 17),
    ("xlAdd", 2),
    ("xlAll", -4104),
    ("xlAccounting3", 6),
    ("xlAllExceptBorders", 7),
    ("xlAutomatic", -4105),
    ("xlBar", 2),
    ("xlBelow", 1),
    ("xlBidi", -5000),
    ("xlBidiCalendar", 3),
    ("xlBoth", 1),
    ("xlBottom", -4107),
    ("xlCascade", 7),
    ("xlCenter", -4108),
    ("xlCenterAcrossSelection", 7),
    ("xlChart4", 2),
    ("xlChartSeries", 17),
    ("xlChartShort", 6),
    ("xlChartTitles", 18),
    ("xlChecker", 9),
    ("xlCircle", 8),
    ("xlClassic1", 1),
    ("xlClassic2", 2),
    ("xlClassic3", 3),
    ("xlClosed", 3),
    ("xlColor1", 7),
    ("xlColor2", 8),
    ("xlColor3", 9),
    ("xlColumn", 3),
    ("xlCombination", -4111),
    ("xlComplete", 4),
    ("xlConstants", 2),
    ("xlContents", 2),
    ("xlContext", -5002),
    ("xlCorner", 2),
    ("xlCrissCross", 16),
    ("xlCross", 4),
    ("xlCustom", -4114),
    ("xlDebugCodePane", 13),
    ("xlDefaultAutoFormat", -1),
    ("xlDesktop", 9),
    ("xlDiamond", 2),
    ("xlDirect", 1),
    ("xlDistributed", -4117),
    ("xlDivide", 5),
    ("xlDoubleAccounting", 5),
    ("xlDoubleClosed", 5),
    ("xlDoubleOpen", 4),
    ("xlDoubleQuote", 1),
    ("xlDrawingObject", 14),
    ("xlEntireChart", 20),
    ("xlExcelMenus", 1),
    ("xlExtended", 3),
    ("xlFill", 5),
    ("xlFirst", 0),
    ("xlFixedValue", 1),
    ("xlFloating", 5),
    ("xlFormats", -4122),
    ("xlFormula", 5),
    ("xlFullScript", 1),
    ("xlGeneral", 1),
    ("xlGray16", 17),
    ("xlGray25", -4124),
    ("xlGray50", -4125),
    ("xlGray75", -4126),
    ("xlGray8", 18),
    ("xlGregorian", 2),
    ("xlGrid", 15),
    ("xlGridline", 22),
    ("xlHigh", -4127),
    ("xlHindiNumerals", 3),
    ("xlIcons", 1),
    ("xlImmediatePane", 12),
    ("xlInside", 2),
    ("xlInteger", 2),
    ("xlJustify", -4130),
    ("xlLast", 1),
    ("xlLastCell", 11),
    ("xlLatin", -5001),
    ("xlLeft", -4131),
    ("xlLeftToRight", 2),
    ("xlLightDown", 13),
    ("xlLightHorizontal", 11),
    ("xlLightUp", 14),
    ("xlLightVertical", 12),
    ("xlList1", 10),
    ("xlList2", 11),
    ("xlList3", 12),
    ("xlLocalFormat1", 15),
    ("xlLocalFormat2", 16),
    ("xlLogicalCursor", 1),
    ("xlLong", 3),
    ("xlLotusHelp", 2),
    ("xlLow", -4134),
    ("xlLTR", -5003),
    ("xlMacrosheetCell", 7),
    ("xlManual", -4135),
    ("xlMaximum", 2),
    ("xlMinimum", 4),
    ("xlMinusValues", 3),
    ("xlMixed", 2),
    ("xlMixedAuthorizedScript", 4),
    ("xlMixedScript", 3),
    ("xlModule", -4141),
    ("xlMultiply", 4),
    ("xlNarrow", 1),
    ("xlNextToAxis", 4),
    ("xlNoDocuments", 3),
    ("xlNone", -4142),
    ("xlNotes", -4144),
    ("xlOff", -4146),
    ("xlOn", 1),
    ("xlOpaque", 3),
    ("xlOpen", 2),
    ("xlOutside", 3),
    ("xlPartial", 3),
    ("xlPartialScript", 2),
    ("xlPercent", 2),
    ("xlPlus", 9),
    ("xlPlusValues", 2),
    ("xlReference", 4),
    ("xlRight", -4152),
    ("xlRTL", -5004),
    ("xlScale", 3),
    ("xlSemiautomatic", 2),
    ("xlSemiGray75", 10),
    ("xlShort", 1),
    ("xlShowLabel", 4),
    ("xlShowLabelAndPercent", 5),
    ("xlShowPercent", 3),
    ("xlShowValue", 2),
    ("xlSimple", -4154),
    ("xlSingle", 2),
    ("xlSingleAccounting", 4),
    ("xlSingleQuote", 2),
    ("xlSolid", 1),
    ("xlSquare", 1),
    ("xlStar", 5),
    ("xlStError", 4),
    ("xlStrict", 2),
    ("xlSubtract", 3),
    ("xlSystem", 1),
    ("xlTextBox", 16),
    ("xlTiled", 1),
    ("xlTitleBar", 8),
    ("xlToolbar", 1),
    ("xlToolbarButton", 2),
    ("xlTop", -4160),
    ("xlTopToBottom", 1),
    ("xlTransparent", 2),
    ("xlTriangle", 3),
    ("xlVeryHidden", 2),
    ("xlVisible", 12),
    ("xlVisualCursor", 2),
    ("xlWatchPane", 11),
    ("xlWide", 3),
    ("xlWorkbookTab", 6),
    ("xlWorksheet4", 1),
    ("xlWorksheetCell", 3),
    ("xlWorksheetShort", 5),
    ("xlBinsTypeAutomatic", 0),
    ("xlBinsTypeCategorical", 1),
    ("xlBinsTypeManual", 2),
    ("xlBinsTypeBinSize", 3),
    ("xlBinsTypeBinCount", 4),
    ("xlCountryCode", 1),
    ("xlCountrySetting", 2),
    ("xlAboveAverage", 0),
    ("xlActionTypeDrillthrough", 256),
    ("xlAutomaticAllocation", 2),
    ("xlEqualAllocation", 1),
    ("xlAllocateIncrement", 2),
    ("xl24HourClock", 33),
    ("xlColumnThenRow", 2),
    ("xlArabicBothStrict", 3),
    ("xlArrangeStyleCascade", 7),
    ("xlArrowHeadLengthLong", 3),
    ("xlArrowHeadStyleClosed", 3),
    ("xlArrowHeadWidthMedium", -4138),
    ("xlFillCopy", 1),
    ("xlAnd", 1),
    ("xlAxisCrossesAutomatic", -4105),
    ("xlPrimary", 1),
    ("xlCategory", 1),
    ("xlBackgroundAutomatic", -4105),
    ("xlBox", 0),
    ("xlHairline", 1),
    ("xlDiagonalDown", 5),
    ("xlDialogActivate", 103),
    ("xlAllValues", 0),
    ("xlCalculatedMeasure", 2),
    ("xlCalculationAutomatic", -4105),
    ("xlAnyKey", 2),
    ("xlCalculating", 1),
    ("xlAutomaticScale", -4105),
    ("xlCellChangeApplied", 3),
    ("xlInsertDeleteCells", 1),
    ("xlCellTypeAllFormatConditions", -4172),
    ("xlChartElementPositionAutomatic", -4105),
    ("xlAnyGallery", 23),
    ("xlAxis", 21),
    ("xlLocationAsNewSheet", 1),
    ("xlAllFaces", 7),
    ("xlStack", 2),
    ("xlSplitByCustomSplit", 4),
    ("xlCheckInMajorVersion", 1),
    ("xlClipboardFormatBIFF", 8),
    ("xlCmdCube", 1),
    ("xlColorIndexAutomatic", -4105),
    ("xlDMYFormat", 4),
    ("xlCommandUnderlinesAutomatic", -4105),
    ("xlCommentAndIndicator", 1),
    ("xlConditionValueAutomaticMax", 7),
    ("xlConnectionTypeDATAFEED", 6),
    ("xlAverage", -4106),
    ("xlBeginsWith", 2),
    ("xlBitmap", 2),
    ("xlExtractData", 2),
    ("xlCreatorCode", 1480803660),
    ("CredentialsMethodIntegrated", 0),
    ("xlCubeAttribute", 4),
    ("xlHierarchy", 1),
    ("xlCopy", 1),
    ("xlValidAlertInformation", 3),
    ("xlValidateCustom", 7),
    ("xlDataBarAxisAutomatic", 0),
    ("xlDataBarBorderNone", 0),
    ("xlDataBarFillGradient", 1),
    ("xlDataBarColor", 0),
    ("xlLabelPositionAbove", 0),
    ("xlDataLabelSeparatorDefault", 1),
    ("xlDataLabelsShowBubbleSizes", 6),
    ("xlDay", 1),
    ("xlAutoFill", 4),
    ("xlShiftToLeft", -4159),
    ("xlDown", -4121),
    ("xlInterpolated", 3),
    ("xlDisplayShapes", -4104),
    ("xlHundredMillions", -8),
    ("xlDuplicate", 1),
    ("xlFilterAboveAverage", 33),
    ("xlBIFF", 2),
    ("xlAutomaticUpdate", 4),
    ("xlPublisher", 1),
    ("xlDisabled", 0),
    ("xlNoRestrictions", 0),
    ("xlCap", 1),
    ("xlX", -4168),
    ("xlErrorBarIncludeBoth", 1),
    ("xlErrorBarTypeCustom", -4114),
    ("xlEmptyCellReferences", 7),
    ("xlReadOnly", 3),
    ("xlAddIn", 18),
    ("xlFileValidationPivotDefault", 0),
    ("xlFillWithAll", -4104),
    ("xlFilterCopy", 2),
    ("xlFilterAllDatesInPeriodDay", 2),
    ("xlFilterStatusOK", 0),
    ("xlComments", -4144),
    ("xlQualityMinimum", 1),
    ("xlTypePDF", 0),
    ("xlButtonControl", 0),
    ("FilterBottom", 0),
    ("xlColumnLabels", 2),
    ("xlA1TableRefs", 0),
    ("GradientFillLinear", 0),
    ("xlHAlignCenter", -4108),
    ("xlHebrewFullScript", 0),
    ("xlAllChanges", 2),
    ("xlHtmlCalc", 1),
    ("xlIMEModeAlpha", 8),
    ("xlIcon0Bars", 37),
    ("xl3Arrows", 1),
    ("xlPivotTableReport", 1),
    ("xlFormatFromLeftOrAbove", 0),
    ("xlShiftDown", -4121),
    ("xlOutline", 1),
    ("xlCompactRow", 0),
    ("xlLegendPositionBottom", -4107),
    ("xlContinuous", 1),
    ("xlExcelLinks", 1),
    ("xlEditionDate", 2),
    ("xlLinkInfoOLELinks", 2),
    ("xlLinkStatusCopiedValues", 10),
    ("xlLinkTypeExcelLinks", 1),
    ("xlListConflictDialog", 0),
    ("xlListDataTypeCheckbox", 9),
    ("xlSrcExternal", 0),
    ("xlColumnHeader", -4110),
    ("xlPart", 2),
    ("LookForBlanks", 0),
    ("xlMicrosoftAccess", 4),
    ("xlMAPI", 1),
    ("xlMarkerStyleAutomatic", -4105),
    ("xlCentimeters", 1),
    ("xlChangeByExcel", 0),
    ("xlNoButton", 0),
    ("xlDefault", -4143),
    ("xlOLEControl", 2),
    ("xlVerbOpen", 2),
    ("xlOartHorizontalOverflowClip", 1),
    ("xlOartVerticalOverflowClip", 1),
    ("xlFitToPage", 2),
    ("xlDownThenOver", 1),
    ("xlDownward", -4170),
    ("xlBlanks", 4),
    ("xlPageBreakAutomatic", -4105),
    ("xlPageBreakFull", 1),
    ("xlLandscape", 2),
    ("xlPaper10x14", 16),
    ("xlParamTypeBigInt", -5),
    ("xlConstant", 1),
    ("xlPasteSpecialOperationAdd", 2),
    ("xlPasteAll", -4104),
    ("xlPatternAutomatic", -4105),
    ("xlPhoneticAlignCenter", 2),
    ("xlHiragana", 2),
    ("xlPrinter", 2),
    ("xlBMP", 1),
    ("xlCenterPoint", 5),
    ("xlHorizontalCoordinate", 1),
    ("xlPivotCellBlankCell", 9),
    ("xlDataFieldScope", 2),
    ("xlDifferenceFrom", 2),
    ("xlDate", 2),
    ("xlColumnField", 2),
    ("xlDoNotRepeatLabels", 1),
    ("xlBefore", 31),
    ("xlPTClassic", 20),
    ("xlMissingItemsDefault", -1),
    ("xlConsolidation", 3),
    ("xlPivotTableVersion2000", 0),
    ("xlFreeFloating", 3),
    ("xlMacintosh", 1),
    ("xlPortugueseBoth", 3),
    ("xlPrintErrorsBlank", 1),
    ("xlPrintInPlace", 16),
    ("xlPriorityHigh", -4127),
    ("xlDisplayPropertyInPivotTable", 1),
    ("xlProtectedViewCloseEdit", 1),
    ("xlProtectedViewWindowMaximized", 2),
    ("xlADORecordset", 7),
    ("xlLensOnly", 0),
    ("xlRangeAutoFormat3DEffects1", 13),
    ("xlRangeValueDefault", 10),
    ("xlA1", 1),
    ("xlAbsolute", 1),
    ("xlRDIAll", 99),
    ("rgbAliceBlue", 16775408),
    ("xlAlways", 1),
    ("xlColumns", 2),
    ("xlAutoActivate", 3),
    ("xlDoNotSaveChanges", 2),
    ("xlExclusive", 3),
    ("xlLocalSessionChanges", 2),
    ("xlScaleLinear", -4132),
    ("xlNext", 1),
    ("xlByColumns", 2),
    ("xlWithinSheet", 1),
    ("xlChart", -4109),
    ("xlSheetHidden", 0),
    ("xlSizeIsArea", 1),
    ("xlSlicer", 1),
    ("xlSlicerCrossFilterHideButtonsWithNoData", 4),
    ("xlSlicerSortAscending", 2),
    ("xlSortNormal", 0),
    ("xlPinYin", 1),
    ("xlCodePage", 2),
    ("SortOnCellColor", 1),
    ("xlAscending", 1),
    ("xlSortColumns", 1),
    ("xlSortLabels", 2),
    ("xlSourceAutoFilter", 3),
    ("xlSpanishTuteoAndVoseo", 1),
    ("xlSparkScaleCustom", 3),
    ("xlSparkColumn", 2),
    ("SparklineColumnsSquare", 2),
    ("xlSpeakByColumns", 1),
    ("xlErrors", 16),
    ("ColorScaleBlackWhite", 3),
    ("xlSubscribeToPicture", -4147),
    ("xlAtBottom", 2),
    ("xlSummaryOnLeft", -4131),
    ("xlStandardSummary", 1),
    ("xlSummaryAbove", 0),
    ("xlTabPositionFirst", 0),
    ("xlBlankRow", 19),
    ("xlDelimited", 1),
    ("xlTextQualifierDoubleQuote", 1),
    ("xlTextVisualLTR", 1),
    ("xlThemeColorAccent1", 5),
    ("xlThemeFontMajor", 2),
    ("xlThreadModeAutomatic", 0),
    ("xlTickLabelOrientationAutomatic", -4105),
    ("xlTickLabelPositionHigh", -4127),
    ("xlLast7Days", 2),
    ("xlDays", 0),
    ("xlTimelineLevelYears", 0),
    ("xlNoButtonChanges", 1),
    ("xlTop10Bottom", 0),
    ("xlTotalsCalculationAverage", 2),
    ("xlExponential", 5),
    ("xlUnderlineStyleDouble", -4119),
    ("xlUpdateLinksAlways", 3),
    ("xlVAlignBottom", -4107),
    ("xlWBATChart", -4109),
    ("xlWebFormattingAll", 1),
    ("xlAllTables", 2),
    ("xlMaximized", -4137),
    ("xlChartAsWindow", 5),
    ("xlNormalView", 1),
    ("xlCommand", 2),
    ("xlXmlImportElementsTruncated", 1),
    ("xlXmlLoadImportToList", 2),
    ("xlGuess", 0),
    ("xlNumberFormatTypeDefault", 0),
    ("xlNumberFormatTypeNumber", 1),
    ("xlNumberFormatTypePercent", 2),
    ("xlCategoryLabelLevelAll", -1),
    ("xlCategoryLabelLevelCustom", -2),
    ("xlCategoryLabelLevelNone", -3),
    ("xlChartElementPositionCustom", -4114),
    ("xlColorIndexNone", -4142),
    ("xlShiftUp", -4162),
    ("xlToLeft", -4159),
    ("xlToRight", -4161),
    ("xlUp", -4162),
    ("xlForecastAggregationAverage", 1),
    ("xlForecastAggregationCount", 2),
    ("xlForecastAggregationCountA", 3),
    ("xlForecastAggregationMax", 4),
    ("xlForecastAggregationMedian", 5),
    ("xlForecastAggregationMin", 6),
    ("xlForecastAggregationSum", 7),
    ("xlForecastDataCompletionInterpolate", 1),
    ("xlForecastDataCompletionZeros", 0),
    ("xlParentDataLabelOptionsBanner", 1),
    ("xlParentDataLabelOptionsNone", 0),
    ("xlParentDataLabelOptionsOverlapping", 2),
    ("xlSeriesNameLevelAll", -1),
    ("xlSeriesNameLevelCustom", -2),
    ("xlSeriesNameLevelNone", -3),
    ("msoAnimAccumulateAlways", 2),
    ("msoAnimAdditiveAddBase", 1),
    ("msoAnimAfterEffectDim", 1),
    ("msoAnimateChartAllAtOnce", 7),
    ("msoAnimCommandTypeCall", 1),
    ("msoAnimDirectionAcross", 18),
    ("msoAnimEffectAppear", 1),
    ("msoAnimEffectAfterFreeze", 1),
    ("msoAnimEffectRestartAlways", 1),
    ("msoAnimFilterEffectSubtypeAcross", 9),
    ("msoAnimFilterEffectTypeBarn", 1),
    ("msoAnimColor", 7),
    ("msoAnimTextUnitEffectByCharacter", 1),
    ("msoAnimTriggerAfterPrevious", 3),
    ("msoAnimTypeColor", 2),
    ("msoClickStateAfterAllAnimations", -2),
    ("ppActionEndShow", 6),
    ("ppAdvanceModeMixed", -2),
    ("ppAfterEffectDim", 2),
    ("ppAlertsAll", 2),
    ("ppArrangeCascade", 2),
    ("ppAutoSizeMixed", -2),
    ("ppBaselineAlignBaseline", 1),
    ("ppBorderBottom", 3),
    ("ppBulletMixed", -2),
    ("ppCaseLower", 2),
    ("ppAnimateByCategory", 2),
    ("ppCheckInMajorVersion", 1),
    ("ppAccent1", 6),
    ("ppDateTimeddddMMMMddyyyy", 2),
    ("ppDirectionLeftToRight", 1),
    ("ppEffectAppear", 3844),
    ("ppFarEastLineBreakLevelCustom", 3),
    ("ppFixedFormatIntentPrint", 2),
    ("ppFixedFormatTypePDF", 2),
    ("ppFollowColorsMixed", -2),
    ("ppFrameColorsBlackTextOnWhite", 5),
    ("ppHorizontalGuide", 1),
    ("ppHTMLAutodetect", 4),
    ("ppIndentControlMixed", -2),
    ("ppMediaTaskStatusNone", 0),
    ("ppMediaTypeMixed", -2),
    ("ppMouseClick", 1),
    ("ppBulletAlphaLCParenBoth", 8),
    ("ppAlignCenter", 2),
    ("ppPasteBitmap", 1),
    ("ppPlaceholderBitmap", 9),
    ("ppPlaying", 0),
    ("ppPrintBlackAndWhite", 2),
    ("ppPrintHandoutHorizontalFirst", 2),
    ("ppPrintOutputBuildSlides", 7),
    ("ppPrintAll", 1),
    ("ppProtectedViewCloseNormal", 0),
    ("ppPublishAll", 1),
    ("ppRDIAll", 99),
    ("ppResampleMediaProfileCustom", 1),
    ("ppRevisionInfoBaseline", 1),
    ("ppSaveAsAddIn", 8),
    ("ppSelectionNone", 0),
    ("ppLayoutBlank", 12),
    ("ppSlideShowManualAdvance", 1),
    ("ppSlideShowPointerAlwaysHidden", 3),
    ("ppShowAll", 1),
    ("ppSlideShowBlackScreen", 3),
    ("ppShowTypeKiosk", 3),
    ("ppSlideSize35MM", 4),
    ("ppSoundEffectsMixed", -2),
    ("ppSoundFormatCDAudio", 3),
    ("ppTabStopCenter", 2),
    ("ppAnimateByAllLevels", 16),
    ("ppBodyStyle", 3),
    ("ppAnimateByCharacter", 2),
    ("ppTransitionSpeedFast", 3),
    ("ppUpdateOptionAutomatic", 2),
    ("ppViewHandoutMaster", 4),
    ("ppWindowMaximized", 3),
    ("xlChartX", -4168),
    ("xlAliceBlue", 16775408),
];

pub(crate) static DOUBLES: &[(&str, f64)] = &[
    ("xlOuterCenterPoint", 2.0),
];

pub(crate) static STRINGS: &[(&str, &str)] = &[
    ("System.OperatingSystem", "Windows NT"),
];
